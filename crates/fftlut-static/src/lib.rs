//! Cosine twiddle table baked in at compile time.
//!
//! `build.rs` renders the table for `FFT_EXPONENT` (env var, default 8) with
//! `fftlut-core` and this crate includes it verbatim, so consumers get a
//! `static` array and allocation-free `lookup_cos`/`lookup_sin`.
//!
//! ```
//! use fftlut_static::{lookup_cos, lookup_sin, COS_LUT, FFT_EXPONENT, LUT_SIZE};
//!
//! assert_eq!(LUT_SIZE, 1 << (FFT_EXPONENT - 1));
//! assert_eq!(COS_LUT[0], 1.0);
//! assert_eq!(lookup_cos(0, 0), 1.0);
//! assert!(lookup_sin(0, 0).abs() < 1e-6);
//! ```
//!
//! Rebuild with `FFT_EXPONENT=<E>` (and optionally `FFT_VALUE_TYPE=f32`) to
//! change the table; anything that needs the same `E` at run time should
//! compare against [`FFT_EXPONENT`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(missing_docs)]

mod generated {
    include!(concat!(env!("OUT_DIR"), "/lut.rs"));
}

pub use generated::{lookup_cos, lookup_sin, FftValue, COS_LUT, FFT_EXPONENT, LUT_SIZE};

/// Transform length `2^FFT_EXPONENT` the table serves.
pub const TRANSFORM_LEN: usize = LUT_SIZE << 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_agree() {
        assert_eq!(COS_LUT.len(), LUT_SIZE);
        assert_eq!(TRANSFORM_LEN, 1usize << FFT_EXPONENT);
    }

    #[test]
    fn quarter_turn() {
        if LUT_SIZE >= 2 {
            // stage 1, element 1 → angle -π/2
            assert!(lookup_cos(1, 1).abs() < 1e-6);
            assert!((lookup_sin(1, 1) + 1.0).abs() < 1e-6);
        }
    }
}
