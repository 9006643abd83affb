//! A fixed-length transform plan sharing one immutable cosine table.
//!
//! Everything that depends only on `E` is computed once here; transforms
//! afterwards only read it, so a plan can be shared across threads.

use std::sync::Arc;

use fftlut_core::{CosineTable, LutError};

use crate::{fft, window, Spectrum};

/// Precomputed state for transforms of length `2^E`.
#[derive(Clone, Debug)]
pub struct FftPlan {
    table: Arc<CosineTable>,
    bitrev: Box<[usize]>,
    window: Box<[f64]>,
}

impl FftPlan {
    /// Build a fresh table and plan for `2^exponent` samples.
    pub fn new(exponent: u32) -> Result<Self, LutError> {
        let table = Arc::new(CosineTable::build(exponent)?);
        Ok(Self::from_table(table))
    }

    /// Plan over an existing table, rejecting one built for another exponent.
    pub fn with_table(table: Arc<CosineTable>, exponent: u32) -> Result<Self, LutError> {
        table.ensure_exponent(exponent)?;
        Ok(Self::from_table(table))
    }

    fn from_table(table: Arc<CosineTable>) -> Self {
        let bitrev = fft::bit_reverse_table(table.exponent()).into_boxed_slice();
        let window = window::hann(&table).into_boxed_slice();
        Self {
            table,
            bitrev,
            window,
        }
    }

    /// Size exponent `E`.
    #[inline]
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.table.exponent()
    }

    /// Transform length `2^E`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bitrev.len()
    }

    /// Always `false`; a plan covers at least two samples.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bitrev.is_empty()
    }

    /// The shared cosine table.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &Arc<CosineTable> {
        &self.table
    }

    /// Hann window coefficients.
    #[inline]
    #[must_use]
    pub fn window(&self) -> &[f64] {
        &self.window
    }

    /// Window `samples` in place.
    pub fn apply_window(&self, samples: &mut [f64]) -> Result<(), LutError> {
        self.check_len(samples.len())?;
        window::apply(&self.window, samples);
        Ok(())
    }

    /// Write the windowed `input` into `out`.
    pub fn copy_windowed(&self, input: &[f64], out: &mut [f64]) -> Result<(), LutError> {
        self.check_len(input.len())?;
        self.check_len(out.len())?;
        window::copy_windowed(&self.window, input, out);
        Ok(())
    }

    /// Forward transform of real `samples` (length `2^E`).
    pub fn transform(&self, samples: &[f64]) -> Result<Spectrum, LutError> {
        self.check_len(samples.len())?;

        // Real input: scatter into bit-reversed order, imaginary part zero.
        let mut out = Spectrum::zeroed(self.len());
        for (&x, &j) in samples.iter().zip(self.bitrev.iter()) {
            out.re[j] = x;
        }
        fft::butterflies_in_place(&self.table, &mut out.re, &mut out.im);
        Ok(out)
    }

    /// Frequency of the strongest bin in `magnitudes`, in Hz.
    ///
    /// Ties go to the lowest bin; an all-zero spectrum reports 0 Hz.
    #[must_use]
    pub fn loudest_frequency(&self, magnitudes: &[f64], sample_rate: u32) -> f64 {
        let mut max_pos = 0usize;
        let mut max_val = 0.0;
        for (i, &m) in magnitudes.iter().enumerate() {
            if m > max_val {
                max_pos = i;
                max_val = m;
            }
        }
        max_pos as f64 * f64::from(sample_rate) / self.len() as f64
    }

    /// Sum of `magnitudes` over bins covering `[min_hz, max_hz)`.
    ///
    /// Bin bounds are truncated like the integer division they come from and
    /// clamped to the slice.
    #[must_use]
    pub fn energy_in_band(
        &self,
        magnitudes: &[f64],
        min_hz: u32,
        max_hz: u32,
        sample_rate: u32,
    ) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        let bin = |hz: u32| {
            let b = u64::from(hz) * self.len() as u64 / u64::from(sample_rate);
            usize::try_from(b).map_or(magnitudes.len(), |b| b.min(magnitudes.len()))
        };
        let (first, last) = (bin(min_hz), bin(max_hz));
        if first >= last {
            return 0.0;
        }
        magnitudes[first..last].iter().sum()
    }

    fn check_len(&self, actual: usize) -> Result<(), LutError> {
        let expected = self.len();
        if expected == actual {
            Ok(())
        } else {
            Err(LutError::LengthMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_table_must_match_exponent() {
        let t = Arc::new(CosineTable::build(5).unwrap());
        assert!(FftPlan::with_table(Arc::clone(&t), 5).is_ok());
        assert_eq!(
            FftPlan::with_table(t, 6).unwrap_err(),
            LutError::ExponentMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let plan = FftPlan::new(3).unwrap();
        assert_eq!(plan.len(), 8);
        assert_eq!(
            plan.transform(&[0.0; 7]).unwrap_err(),
            LutError::LengthMismatch {
                expected: 8,
                actual: 7
            }
        );
        let mut short = [0.0; 4];
        assert!(plan.apply_window(&mut short).is_err());
    }

    #[test]
    fn band_energy_clamps_and_truncates() {
        let plan = FftPlan::new(3).unwrap(); // 8 points
        let mags = [1.0, 2.0, 3.0, 4.0, 5.0];
        // 8000 Hz / 8 = 1000 Hz per bin.
        assert_eq!(plan.energy_in_band(&mags, 1000, 3000, 8000), 5.0);
        assert_eq!(plan.energy_in_band(&mags, 1999, 3999, 8000), 5.0);
        assert_eq!(plan.energy_in_band(&mags, 0, 100_000, 8000), 15.0);
        assert_eq!(plan.energy_in_band(&mags, 3000, 1000, 8000), 0.0);
        assert_eq!(plan.energy_in_band(&mags, 0, 1000, 0), 0.0);
    }

    #[test]
    fn loudest_picks_first_max() {
        let plan = FftPlan::new(3).unwrap();
        assert_eq!(plan.loudest_frequency(&[0.0, 3.0, 3.0, 1.0], 8000), 1000.0);
        assert_eq!(plan.loudest_frequency(&[0.0; 5], 8000), 0.0);
    }
}
