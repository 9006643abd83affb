//! Serialization of a [`CosineTable`] into something another build can consume.
//!
//! Three renderings, picked explicitly or from the output extension:
//! - **Rust** (`.rs`): a module body for `include!`, with `FFT_EXPONENT`,
//!   `LUT_SIZE`, `COS_LUT`, `lookup_cos`/`lookup_sin` and a compile-time
//!   size check.
//! - **C header** (`.h`): `LUT_H` include guard, `cos_lut[LUT_SIZE]` and the
//!   two `static inline` lookups; `fft_value_type` comes from `config.h`.
//! - **JSON** (`.json`): the serde form of the table, reloadable with
//!   [`read_table_json`].
//!
//! Rendering is pure; only [`write_artifact`] touches the filesystem, and it
//! renders fully before creating the file.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::{CosineTable, LutError};

/// Rendering target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Rust module body for `include!`.
    Rust,
    /// C header with include guard.
    CHeader,
    /// JSON document.
    Json,
}

impl ArtifactFormat {
    /// Infer from the (case-insensitive) extension: `rs`, `h`, `json`.
    pub fn from_path(path: &Path) -> Result<Self, LutError> {
        match ext_lower(path).as_deref() {
            Some("rs") => Ok(Self::Rust),
            Some("h") => Ok(Self::CHeader),
            Some("json") => Ok(Self::Json),
            _ => Err(LutError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Element type of the emitted Rust array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ValueType {
    /// `f32`.
    F32,
    /// `f64`.
    #[default]
    F64,
}

impl ValueType {
    const fn rust_name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Shortest literal that round-trips in the target type.
    #[allow(clippy::cast_possible_truncation)]
    fn literal(self, v: f64) -> String {
        match self {
            Self::F32 => format!("{:?}", v as f32),
            Self::F64 => format!("{v:?}"),
        }
    }
}

/// Values per line in array literals.
const VALUES_PER_LINE: usize = 4;

/// Render `table` in `format`. `value_type` only affects the Rust rendering.
///
/// Only the JSON rendering can fail, and only if serde does.
pub fn render(
    table: &CosineTable,
    format: ArtifactFormat,
    value_type: ValueType,
) -> serde_json::Result<String> {
    match format {
        ArtifactFormat::Rust => Ok(render_rust(table, value_type)),
        ArtifactFormat::CHeader => Ok(render_c_header(table)),
        ArtifactFormat::Json => render_json(table),
    }
}

fn render_rust(table: &CosineTable, value_type: ValueType) -> String {
    let e = table.exponent();
    let n = table.size();
    let mut out = String::with_capacity(64 + n * 24);

    // `write!` into a String cannot fail.
    let _ = writeln!(
        out,
        "// This file was auto-generated by fftlut (FFT_EXPONENT = {e}). Do not edit.\n"
    );
    let _ = writeln!(out, "/// Size exponent the table was generated for.");
    let _ = writeln!(out, "pub const FFT_EXPONENT: u32 = {e};");
    let _ = writeln!(out, "/// Number of table entries, `2^(FFT_EXPONENT - 1)`.");
    let _ = writeln!(out, "pub const LUT_SIZE: usize = {n};");
    let _ = writeln!(out, "/// Sample type of [`COS_LUT`].");
    let _ = writeln!(out, "pub type FftValue = {};\n", value_type.rust_name());
    let _ = writeln!(out, "const _: () = assert!(LUT_SIZE == 1 << (FFT_EXPONENT - 1));\n");

    let _ = writeln!(out, "/// `COS_LUT[k] = cos(-π·k / LUT_SIZE)`.");
    let _ = writeln!(out, "#[allow(clippy::approx_constant, clippy::unreadable_literal)]");
    let _ = write!(out, "pub static COS_LUT: [FftValue; LUT_SIZE] = [");
    for (k, v) in table.values().iter().enumerate() {
        if k % VALUES_PER_LINE == 0 {
            out.push_str("\n   ");
        }
        // Bit-exact boundary, independent of the formatter.
        let lit = if k == 0 { "1.0".to_owned() } else { value_type.literal(*v) };
        let _ = write!(out, " {lit},");
    }
    out.push_str("\n];\n\n");

    out.push_str(RUST_LOOKUPS);
    out
}

const RUST_LOOKUPS: &str = r"#[inline]
fn fold_index(raw: usize) -> FftValue {
    let v = COS_LUT[raw & (LUT_SIZE - 1)];
    if raw & LUT_SIZE == 0 {
        v
    } else {
        -v
    }
}

#[inline]
fn stage_shift(stage: u32) -> u32 {
    debug_assert!(stage < FFT_EXPONENT);
    FFT_EXPONENT.wrapping_sub(stage).wrapping_sub(1)
}

/// `cos(-π·element / 2^stage)`; `stage < FFT_EXPONENT`, `element < 2^stage`.
#[inline]
#[must_use]
pub fn lookup_cos(stage: u32, element: usize) -> FftValue {
    fold_index(element.wrapping_shl(stage_shift(stage)))
}

/// `sin(-π·element / 2^stage)`; `stage < FFT_EXPONENT`, `element < 2^stage`.
#[inline]
#[must_use]
pub fn lookup_sin(stage: u32, element: usize) -> FftValue {
    if LUT_SIZE == 1 {
        return 0.0;
    }
    fold_index(
        element
            .wrapping_shl(stage_shift(stage))
            .wrapping_add(LUT_SIZE / 2),
    )
}
";

fn render_c_header(table: &CosineTable) -> String {
    let e = table.exponent();
    let n = table.size();
    let mut out = String::with_capacity(512 + n * 16);

    out.push_str("#ifndef LUT_H\n#define LUT_H\n");
    out.push_str("// This file was auto-generated by fftlut. Do not edit.\n\n");
    out.push_str("#include \"config.h\"\n\n");
    let _ = writeln!(out, "#define LUT_EXPONENT {e}");
    let _ = writeln!(out, "#define LUT_SIZE {n}\n");
    out.push_str("#if defined(FFT_EXPONENT) && FFT_EXPONENT != LUT_EXPONENT\n");
    out.push_str("#error \"lut.h was generated for a different FFT_EXPONENT\"\n");
    out.push_str("#endif\n\n");

    out.push_str("static fft_value_type cos_lut[LUT_SIZE] = {1.0");
    for v in table.values().iter().skip(1) {
        let _ = write!(out, ", {v:.10}");
    }
    out.push_str("};\n\n");

    out.push_str(C_LOOKUPS);
    out.push_str("\n#endif // LUT_H\n");
    out
}

const C_LOOKUPS: &str = "static inline fft_value_type lut_fold(unsigned long long idx) {
\tfft_value_type v = cos_lut[idx & (LUT_SIZE-1)];
\treturn (idx & LUT_SIZE) ? -v : v;
}

static inline fft_value_type lookup_sin(int layer, int element) {
#if LUT_SIZE == 1
\t(void)layer; (void)element;
\treturn 0;
#else
\treturn lut_fold(((unsigned long long)element << (LUT_EXPONENT - layer - 1)) + LUT_SIZE/2);
#endif
}

static inline fft_value_type lookup_cos(int layer, int element) {
\treturn lut_fold((unsigned long long)element << (LUT_EXPONENT - layer - 1));
}
";

fn render_json(table: &CosineTable) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(table)?;
    s.push('\n');
    Ok(s)
}

/// Render and write `table` to `path`, creating parent directories.
pub fn write_artifact<P: AsRef<Path>>(
    path: P,
    table: &CosineTable,
    format: ArtifactFormat,
    value_type: ValueType,
) -> Result<()> {
    let path_ref = path.as_ref();
    let body = render(table, format, value_type)
        .with_context(|| format!("render {format:?} artifact for {}", display(path_ref)))?;

    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    w.write_all(body.as_bytes())
        .with_context(|| format!("write {}", display(path_ref)))?;
    w.flush()
        .with_context(|| format!("flush {}", display(path_ref)))?;
    Ok(())
}

/// Load a JSON table written by [`write_artifact`], re-checking its invariants.
pub fn read_table_json<P: AsRef<Path>>(path: P) -> Result<CosineTable> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let rdr = BufReader::new(f);
    let t: CosineTable = serde_json::from_reader(rdr)
        .with_context(|| format!("deserialize cosine table from {}", display(path_ref)))?;
    Ok(t)
}

/// Ensure the parent directory for a file exists (no-op if none).
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", display(dir)))?;
        }
    }
    Ok(())
}

fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
}

/// Human-friendly path display for error messages.
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
