//! Hann window `w_i = 0.5·(1 − cos(2π·i/L))`.
//!
//! `cos(2π·i/L) = cos(-π·i/N)` with `N = L/2`, which is exactly the last-stage
//! cosine lookup, so the window is derived from the same table.

use fftlut_core::CosineTable;

/// Hann window coefficients for `table.transform_len()` samples.
#[must_use]
pub fn hann(table: &CosineTable) -> Vec<f64> {
    let last = table.exponent() - 1;
    (0..table.transform_len())
        .map(|i| 0.5 * (1.0 - table.cos_at_fast(last, i)))
        .collect()
}

/// Multiply `samples` by `window` element-wise.
pub fn apply(window: &[f64], samples: &mut [f64]) {
    for (x, w) in samples.iter_mut().zip(window) {
        *x *= w;
    }
}

/// `out[i] = input[i] · window[i]`, leaving the input untouched.
pub fn copy_windowed(window: &[f64], input: &[f64], out: &mut [f64]) {
    for ((o, x), w) in out.iter_mut().zip(input).zip(window) {
        *o = x * w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;

    #[test]
    fn matches_closed_form() {
        let t = CosineTable::build(6).unwrap();
        let w = hann(&t);
        let l = w.len();
        assert_eq!(l, 64);
        for (i, wi) in w.iter().enumerate() {
            let want = 0.5 * (1.0 - (2.0 * PI * i as f64 / l as f64).cos());
            assert_abs_diff_eq!(*wi, want, epsilon = 1e-12);
        }
        assert_eq!(w[0], 0.0);
        assert_eq!(w[l / 2], 1.0);
    }

    #[test]
    fn copy_leaves_input_alone() {
        let t = CosineTable::build(2).unwrap();
        let w = hann(&t);
        let input = [1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0; 4];
        copy_windowed(&w, &input, &mut out);
        assert_eq!(input, [1.0, 2.0, 3.0, 4.0]);

        let mut inplace = input;
        apply(&w, &mut inplace);
        assert_eq!(out, inplace);
    }
}
