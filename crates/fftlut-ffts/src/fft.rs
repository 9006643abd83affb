//! In-place radix-2 Cooley–Tukey FFT, decimation in time.
//!
//! Input is permuted into bit-reversed order, then stage `s` combines pairs
//! `2^s` apart with twiddle `w = e^(-iπ·j/2^s)`, read from the cosine table
//! via `cos_at_fast`/`sin_at_fast`. No trigonometry runs per transform.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use fftlut_core::CosineTable;

#[inline]
pub(crate) fn bitrev(mut x: usize, bits: u32) -> usize {
    let mut y = 0usize;
    for _ in 0..bits {
        y = (y << 1) | (x & 1);
        x >>= 1;
    }
    y
}

/// Bit-reversal permutation for `2^bits` points.
#[must_use]
pub fn bit_reverse_table(bits: u32) -> Vec<usize> {
    (0..1usize << bits).map(|i| bitrev(i, bits)).collect()
}

/// Forward FFT in place over split real/imaginary buffers already in
/// bit-reversed order.
///
/// Both buffers must have length `table.transform_len()`.
pub fn butterflies_in_place(table: &CosineTable, re: &mut [f64], im: &mut [f64]) {
    let n = re.len();
    debug_assert_eq!(n, table.transform_len(), "buffer length must be 2^E");
    debug_assert_eq!(im.len(), n);

    for stage in 0..table.exponent() {
        let half = 1usize << stage;
        let len = half << 1;

        let mut start = 0usize;
        while start < n {
            for j in 0..half {
                let w = table.twiddle_fast(stage, j);
                let (l, r) = (start + j, start + j + half);

                // DIT butterfly: (u, v) -> (u + w*v, u - w*v)
                let vr = re[r] * w.cos - im[r] * w.sin;
                let vi = re[r] * w.sin + im[r] * w.cos;
                re[r] = re[l] - vr;
                im[r] = im[l] - vi;
                re[l] += vr;
                im[l] += vi;
            }
            start += len;
        }
    }
}
