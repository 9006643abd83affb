use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::LutError;

/// Largest supported size exponent: a 2^24-point transform, 64 MiB of
/// `f64` cosines. Stays well under `isize::MAX` bytes on 32-bit targets.
pub const MAX_EXPONENT: u32 = 24;

const _: () = assert!(
    (1usize << (MAX_EXPONENT - 1)) <= isize::MAX as usize / core::mem::size_of::<f64>()
);

/// `N` cosines sampling the half period `cos(-π·k/N)`, `k ∈ [0, N)`.
///
/// **Invariants**
/// - `values.len() == 1 << (exponent - 1)`;
/// - `values[0] == 1.0` bit-exactly;
/// - never mutated after [`CosineTable::build`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr", into = "TableRepr")]
pub struct CosineTable {
    pub(crate) exponent: u32,
    pub(crate) values: Box<[f64]>,
}

impl CosineTable {
    /// Build the table for a transform of length `2^exponent`.
    ///
    /// Fails with [`LutError::InvalidExponent`] unless `1 <= exponent <= MAX_EXPONENT`,
    /// or if the allocator cannot provide the table.
    pub fn build(exponent: u32) -> Result<Self, LutError> {
        let size = table_size(exponent)?;
        let step = PI / size as f64;

        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|_| LutError::InvalidExponent { exponent })?;
        // Literal so the boundary is exact whatever `cos` rounds to.
        values.push(1.0);
        for k in 1..size {
            values.push((-step * k as f64).cos());
        }

        Ok(Self {
            exponent,
            values: values.into_boxed_slice(),
        })
    }

    /// Size exponent `E` the table was built for.
    #[inline]
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Number of entries `N = 2^(E-1)`.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Transform length `2^E` this table serves.
    #[inline]
    #[must_use]
    pub fn transform_len(&self) -> usize {
        self.values.len() << 1
    }

    /// The raw samples, index `k` holding `cos(-π·k/N)`.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Reject a table built for a different exponent than `expected`.
    pub fn ensure_exponent(&self, expected: u32) -> Result<(), LutError> {
        if self.exponent == expected {
            Ok(())
        } else {
            Err(LutError::ExponentMismatch {
                expected,
                actual: self.exponent,
            })
        }
    }
}

/// Free-function form of [`CosineTable::build`].
#[inline]
pub fn build_table(exponent: u32) -> Result<CosineTable, LutError> {
    CosineTable::build(exponent)
}

/// `N = 2^(E-1)` for a valid exponent.
pub(crate) fn table_size(exponent: u32) -> Result<usize, LutError> {
    if !(1..=MAX_EXPONENT).contains(&exponent) {
        return Err(LutError::InvalidExponent { exponent });
    }
    1usize
        .checked_shl(exponent - 1)
        .filter(|&n| n != 0)
        .ok_or(LutError::InvalidExponent { exponent })
}

/* ----------------------------- serde boundary ----------------------------- */

/// Slack for tables produced by another platform's `cos`.
const SAMPLE_TOLERANCE: f64 = 1e-12;

/// On-disk form. `size` is redundant and checked on the way in.
#[derive(Serialize, Deserialize)]
struct TableRepr {
    exponent: u32,
    size: usize,
    values: Vec<f64>,
}

impl From<CosineTable> for TableRepr {
    fn from(t: CosineTable) -> Self {
        Self {
            exponent: t.exponent,
            size: t.values.len(),
            values: t.values.into_vec(),
        }
    }
}

impl TryFrom<TableRepr> for CosineTable {
    type Error = LutError;

    fn try_from(r: TableRepr) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| LutError::CorruptTable { reason };

        let expected = table_size(r.exponent)?;
        if r.size != expected || r.values.len() != expected {
            return Err(corrupt(format!(
                "exponent {} needs {expected} values, header says {} and body has {}",
                r.exponent,
                r.size,
                r.values.len()
            )));
        }
        if r.values[0].to_bits() != 1.0f64.to_bits() {
            return Err(corrupt(format!("values[0] = {}, expected 1.0", r.values[0])));
        }
        if let Some(k) = r
            .values
            .iter()
            .position(|v| !v.is_finite() || v.abs() > 1.0)
        {
            return Err(corrupt(format!("values[{k}] = {} is not a cosine", r.values[k])));
        }
        let reference = Self::build(r.exponent)?;
        if let Some(k) = r
            .values
            .iter()
            .zip(reference.values())
            .position(|(got, want)| (got - want).abs() > SAMPLE_TOLERANCE)
        {
            return Err(corrupt(format!(
                "values[{k}] = {}, expected cos(-π·{k}/{expected}) = {}",
                r.values[k], reference.values[k]
            )));
        }

        Ok(Self {
            exponent: r.exponent,
            values: r.values.into_boxed_slice(),
        })
    }
}
