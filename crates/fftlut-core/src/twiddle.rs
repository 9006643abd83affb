//! Twiddle lookups over a [`CosineTable`].
//!
//! Stage `s` of a length-`2^E` transform needs `exp(-iπ·j / 2^s)` for
//! `j < 2^s`. With `N = 2^(E-1)` that angle is `-π·idx/N`, `idx = j·2^(E-s-1)`.
//!
//! - `cos`: read `values[idx]`.
//! - `sin`: `sin(-π·idx/N) = cos(-π·(idx + N/2)/N)`, so read at `idx + N/2`.
//!
//! An index in `[N, 2N)` is folded with `& (N-1)` and negated
//! (`cos(x - π) = -cos(x)`). Only bit `N` of the raw index decides the sign,
//! so the fast path is total: it never reads outside the table, whatever the
//! element.

use crate::{CosineTable, LutError};

/// Cosine and sine of one butterfly twiddle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Twiddle {
    /// Real part.
    pub cos: f64,
    /// Imaginary part.
    pub sin: f64,
}

impl CosineTable {
    /// `cos(-π·element / 2^stage)`, validated.
    ///
    /// Requires `stage < E` and `element < 2^stage`.
    #[inline]
    pub fn cos_at(&self, stage: u32, element: usize) -> Result<f64, LutError> {
        self.check_request(stage, element, 0)?;
        Ok(self.cos_at_fast(stage, element))
    }

    /// `sin(-π·element / 2^stage)`, validated.
    ///
    /// Requires `stage < E` and `element < 2^stage`.
    #[inline]
    pub fn sin_at(&self, stage: u32, element: usize) -> Result<f64, LutError> {
        self.check_request(stage, element, self.size() >> 1)?;
        Ok(self.sin_at_fast(stage, element))
    }

    /// Both components of the twiddle, validated.
    #[inline]
    pub fn twiddle(&self, stage: u32, element: usize) -> Result<Twiddle, LutError> {
        Ok(Twiddle {
            cos: self.cos_at(stage, element)?,
            sin: self.sin_at(stage, element)?,
        })
    }

    /// Unvalidated cosine for butterfly inner loops.
    ///
    /// `stage` must be below the exponent (debug-asserted). Any `element` is
    /// accepted and folded by periodicity.
    #[inline]
    #[must_use]
    pub fn cos_at_fast(&self, stage: u32, element: usize) -> f64 {
        self.fold(element.wrapping_shl(self.shift(stage)))
    }

    /// Unvalidated sine for butterfly inner loops. Same contract as
    /// [`CosineTable::cos_at_fast`].
    #[inline]
    #[must_use]
    pub fn sin_at_fast(&self, stage: u32, element: usize) -> f64 {
        let n = self.size();
        if n == 1 {
            // E = 1: every angle is a multiple of π.
            return 0.0;
        }
        self.fold(
            element
                .wrapping_shl(self.shift(stage))
                .wrapping_add(n >> 1),
        )
    }

    /// Both components, unvalidated.
    #[inline]
    #[must_use]
    pub fn twiddle_fast(&self, stage: u32, element: usize) -> Twiddle {
        Twiddle {
            cos: self.cos_at_fast(stage, element),
            sin: self.sin_at_fast(stage, element),
        }
    }

    #[inline]
    fn shift(&self, stage: u32) -> u32 {
        debug_assert!(stage < self.exponent, "stage {stage} >= exponent {}", self.exponent);
        self.exponent.wrapping_sub(stage).wrapping_sub(1)
    }

    /// `cos(-π·raw/N)` for any raw index.
    #[inline]
    fn fold(&self, raw: usize) -> f64 {
        let n = self.values.len();
        let v = self.values[raw & (n - 1)];
        if raw & n == 0 {
            v
        } else {
            -v
        }
    }

    fn check_request(&self, stage: u32, element: usize, offset: usize) -> Result<(), LutError> {
        if stage >= self.exponent {
            return Err(LutError::StageOutOfRange {
                stage,
                exponent: self.exponent,
            });
        }
        if element >> stage != 0 {
            let index = 1usize
                .checked_shl(self.shift(stage))
                .and_then(|step| element.checked_mul(step))
                .and_then(|i| i.checked_add(offset))
                .unwrap_or(usize::MAX);
            return Err(LutError::IndexOutOfRange {
                stage,
                element,
                index,
                size: self.size(),
            });
        }
        Ok(())
    }
}

/// Validated `lookup_cos(stage, element)` over `table`.
#[inline]
pub fn lookup_cos(table: &CosineTable, stage: u32, element: usize) -> Result<f64, LutError> {
    table.cos_at(stage, element)
}

/// Validated `lookup_sin(stage, element)` over `table`.
#[inline]
pub fn lookup_sin(table: &CosineTable, stage: u32, element: usize) -> Result<f64, LutError> {
    table.sin_at(stage, element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn e3() -> CosineTable {
        CosineTable::build(3).unwrap()
    }

    #[test]
    fn cos_at_stage_two_element_zero() {
        assert_eq!(e3().cos_at(2, 0).unwrap(), 1.0);
    }

    #[test]
    fn cos_at_stage_zero_element_zero() {
        assert_eq!(e3().cos_at(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn sin_at_stage_two_element_zero_reads_quarter() {
        // idx = 0 + N/2 = 2 → cos(-π/2)
        let t = e3();
        assert_eq!(t.sin_at(2, 0).unwrap(), t.values()[2]);
        assert_abs_diff_eq!(t.sin_at(2, 0).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sin_fold_negates_wrapped_index() {
        // raw idx = 1·4 + 2 = 6 ≥ 4 → 6 & 3 = 2, negated.
        let t = e3();
        assert_eq!(t.sin_at_fast(0, 1), -t.values()[2]);
        assert_abs_diff_eq!(t.sin_at_fast(0, 1), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sin_at_last_stage_folds_once() {
        // stage E-1, element N-1: raw = 3 + 2 = 5 → -values[1]
        let t = e3();
        assert_eq!(t.sin_at(2, 3).unwrap(), -t.values()[1]);
        assert_abs_diff_eq!(
            t.sin_at(2, 3).unwrap(),
            (-core::f64::consts::PI * 3.0 / 4.0).sin(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn validated_rejects_element_past_stage() {
        let t = e3();
        assert_eq!(
            t.cos_at(0, 1),
            Err(LutError::IndexOutOfRange {
                stage: 0,
                element: 1,
                index: 4,
                size: 4
            })
        );
        assert_eq!(
            t.sin_at(1, 2),
            Err(LutError::IndexOutOfRange {
                stage: 1,
                element: 2,
                index: 6,
                size: 4
            })
        );
    }

    #[test]
    fn validated_rejects_deep_stage() {
        assert_eq!(
            lookup_cos(&e3(), 3, 0),
            Err(LutError::StageOutOfRange {
                stage: 3,
                exponent: 3
            })
        );
        assert!(lookup_sin(&e3(), 7, 0).is_err());
    }

    #[test]
    fn single_entry_table() {
        let t = CosineTable::build(1).unwrap();
        assert_eq!(t.cos_at(0, 0).unwrap(), 1.0);
        assert_eq!(t.sin_at(0, 0).unwrap(), 0.0);
        assert_eq!(t.cos_at_fast(0, 1), -1.0);
        assert_eq!(t.sin_at_fast(0, 1), 0.0);
    }

    #[test]
    fn cos_fast_folds_past_half_period() {
        // stage 0, element 1 → angle -π.
        let t = CosineTable::build(4).unwrap();
        assert_eq!(t.cos_at_fast(0, 1), -1.0);
        assert_eq!(t.cos_at_fast(0, 2), 1.0);
    }

    #[test]
    fn twiddle_pairs_components() {
        let t = CosineTable::build(6).unwrap();
        let w = t.twiddle(4, 3).unwrap();
        assert_eq!(w, t.twiddle_fast(4, 3));
        assert_eq!(w.cos, t.cos_at(4, 3).unwrap());
        assert_eq!(w.sin, t.sin_at(4, 3).unwrap());
    }
}
