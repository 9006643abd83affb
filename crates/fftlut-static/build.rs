//! Generates `$OUT_DIR/lut.rs` from `FFT_EXPONENT` / `FFT_VALUE_TYPE`.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use fftlut_core::{write_artifact, ArtifactFormat, CosineTable, ValueType};

/// Matches the capture pipeline's 256-point transform.
const DEFAULT_EXPONENT: u32 = 8;

fn exponent() -> Result<u32> {
    match env::var("FFT_EXPONENT") {
        Ok(s) => s
            .trim()
            .parse()
            .with_context(|| format!("FFT_EXPONENT={s:?} is not an unsigned integer")),
        Err(env::VarError::NotPresent) => Ok(DEFAULT_EXPONENT),
        Err(e) => Err(e).context("reading FFT_EXPONENT"),
    }
}

fn value_type() -> Result<ValueType> {
    match env::var("FFT_VALUE_TYPE").as_deref() {
        Ok("f32") => Ok(ValueType::F32),
        Ok("f64") | Err(env::VarError::NotPresent) => Ok(ValueType::F64),
        Ok(other) => bail!("FFT_VALUE_TYPE={other:?}: expected f32 or f64"),
        Err(e) => Err(e.clone()).context("reading FFT_VALUE_TYPE"),
    }
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FFT_EXPONENT");
    println!("cargo:rerun-if-env-changed=FFT_VALUE_TYPE");

    let exponent = exponent()?;
    let table = CosineTable::build(exponent)
        .with_context(|| format!("building cosine table for FFT_EXPONENT={exponent}"))?;

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").context("OUT_DIR not set")?);
    write_artifact(
        out_dir.join("lut.rs"),
        &table,
        ArtifactFormat::Rust,
        value_type()?,
    )
}
