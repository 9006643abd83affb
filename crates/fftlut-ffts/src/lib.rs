//! Radix-2 FFT over real samples, with every twiddle read from a
//! [`CosineTable`](fftlut_core::CosineTable).
//!
//! - [`FftPlan`]: shared table + bit-reversal permutation + Hann window for a
//!   fixed length `2^E`.
//! - [`fft`]: the in-place decimation-in-time butterflies.
//! - [`spectrum`]: magnitudes, loudest bin, band energy.
//! - [`dft`]: naive **O(n²)** reference used by tests and benches.
//!
//! ```
//! use fftlut_ffts::FftPlan;
//!
//! let plan = FftPlan::new(4)?;                       // 16 samples
//! let tone: Vec<f64> = (0..16).map(|i| if i % 4 == 0 { 1.0 } else { 0.0 }).collect();
//! let spec = plan.transform(&tone)?;
//! assert!((spec.re[4] - 4.0).abs() < 1e-9);
//! # Ok::<(), fftlut_core::LutError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown
)]
#![allow(clippy::missing_errors_doc, clippy::cast_precision_loss)]

pub mod fft; // in-place butterflies
pub mod plan;
pub mod spectrum;
pub mod window;

pub use plan::FftPlan;
pub use spectrum::{Spectrum, DEFAULT_SAMPLE_RATE};

use core::f64::consts::PI;

/// Naive DFT of real input: `X_k = Σ_j x_j · e^(-2πi·jk/n)`. Complexity **O(n²)**.
#[must_use]
pub fn dft(samples: &[f64]) -> Spectrum {
    let n = samples.len();
    let mut out = Spectrum::zeroed(n);
    for k in 0..n {
        let (mut re, mut im) = (0.0, 0.0);
        for (j, &x) in samples.iter().enumerate() {
            // (j·k) mod n keeps the angle small for large n.
            let theta = -2.0 * PI * ((j * k) % n) as f64 / n as f64;
            re += x * theta.cos();
            im += x * theta.sin();
        }
        out.re[k] = re;
        out.im[k] = im;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dft_of_impulse_is_flat() {
        let mut x = vec![0.0; 8];
        x[0] = 1.0;
        let s = dft(&x);
        for k in 0..8 {
            assert_abs_diff_eq!(s.re[k], 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(s.im[k], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn dft_of_constant_is_dc() {
        let s = dft(&[2.0; 4]);
        assert_abs_diff_eq!(s.re[0], 8.0, epsilon = 1e-12);
        for k in 1..4 {
            assert_abs_diff_eq!(s.re[k], 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(s.im[k], 0.0, epsilon = 1e-12);
        }
    }
}
