use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building, reading or consuming a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LutError {
    /// The generator was invoked without a size exponent.
    #[error("Argument required: FFT_EXPONENT")]
    MissingArgument,

    /// `E` outside `1..=MAX_EXPONENT`; the table would be empty or unaddressable.
    #[error("invalid FFT exponent {exponent}: expected 1..={max}", max = crate::MAX_EXPONENT)]
    InvalidExponent {
        /// Rejected exponent.
        exponent: u32,
    },

    /// A stage at or past the transform depth.
    #[error("stage {stage} out of range for exponent {exponent}")]
    StageOutOfRange {
        /// Requested stage.
        stage: u32,
        /// Exponent of the table.
        exponent: u32,
    },

    /// `element >= 2^stage`: the derived index leaves the half period.
    #[error("twiddle ({stage}, {element}) maps to index {index}, table holds {size}")]
    IndexOutOfRange {
        /// Requested stage.
        stage: u32,
        /// Requested element.
        element: usize,
        /// Unfolded table index the request maps to (saturated on overflow).
        index: usize,
        /// Table size `N`.
        size: usize,
    },

    /// Table built for a different `E` than the consumer expects.
    #[error("table built for exponent {actual}, consumer expects {expected}")]
    ExponentMismatch {
        /// Exponent the consumer was configured with.
        expected: u32,
        /// Exponent the table was built with.
        actual: u32,
    },

    /// Transform input of the wrong length.
    #[error("expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Transform length `2^E`.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Output path with an extension we do not render.
    #[error("cannot infer artifact format from {}", path.display())]
    UnknownFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// A serialized table that violates the table invariants.
    #[error("corrupt cosine table: {reason}")]
    CorruptTable {
        /// What failed to validate.
        reason: String,
    },
}
