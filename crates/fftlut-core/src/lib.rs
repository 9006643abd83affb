//! fftlut-core — half-period cosine table and twiddle accessors for radix-2 FFTs.
//!
//! A transform of length `2^E` needs twiddles `exp(-iπ·j / 2^s)` at every
//! butterfly stage `s`. All of them are multiples of `π/N` with `N = 2^(E-1)`,
//! so a single table of `N` cosines over the half period `[0, -π)` is enough:
//! - cosine is read directly, negated when the index runs past `N`;
//! - sine is cosine shifted by a quarter period (`N/2` samples).
//!
//! ```
//! use fftlut_core::CosineTable;
//!
//! let table = CosineTable::build(3)?;            // N = 4
//! assert_eq!(table.values()[0], 1.0);
//! assert_eq!(table.cos_at(2, 0)?, 1.0);
//! assert!(table.sin_at(0, 0)?.abs() < 1e-12);
//! # Ok::<(), fftlut_core::LutError>(())
//! ```
//!
//! The table is built once and never mutated; share it by reference or `Arc`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Rendering the table as a Rust module, C header or JSON document.
pub mod artifact;
/// Error taxonomy shared by the builder, accessors and consumers.
pub mod error;
/// The cosine table and its builder.
pub mod table;
/// Stage/element → table index folding and the `cos`/`sin` accessors.
pub mod twiddle;

pub use artifact::{read_table_json, render, write_artifact, ArtifactFormat, ValueType};
pub use error::LutError;
pub use table::{build_table, CosineTable, MAX_EXPONENT};
pub use twiddle::{lookup_cos, lookup_sin, Twiddle};
