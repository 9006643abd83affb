// crates/fftlut-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fftlut_core::{write_artifact, ArtifactFormat, CosineTable, LutError, ValueType};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "fftlut-cli",
    about = "FFT twiddle table generator",
    long_about = "FFT twiddle table generator.\n\nBuilds the 2^(E-1)-entry cosine table for a 2^E-point FFT and writes it as a Rust module, C header or JSON document, together with the lookup_cos/lookup_sin accessors.",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Size exponent E (transform length 2^E, table length 2^(E-1))
    #[arg(value_name = "FFT_EXPONENT")]
    exponent: Option<u32>,

    /// Output path for the generated artifact
    #[arg(long, short, default_value = "lut.rs")]
    out: PathBuf,

    /// Artifact format; `auto` infers it from the output extension (.rs/.h/.json)
    #[arg(long, value_enum, default_value_t = FormatOpt::Auto)]
    format: FormatOpt,

    /// Element type of the emitted Rust table
    #[arg(long, value_enum, default_value_t = ValueTypeOpt::F64)]
    value_type: ValueTypeOpt,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum FormatOpt {
    /// Infer from the output extension
    Auto,
    /// Rust module body for `include!`
    Rust,
    /// C header with include guard
    C,
    /// JSON document
    Json,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum ValueTypeOpt {
    F32,
    F64,
}

impl From<ValueTypeOpt> for ValueType {
    fn from(v: ValueTypeOpt) -> Self {
        match v {
            ValueTypeOpt::F32 => Self::F32,
            ValueTypeOpt::F64 => Self::F64,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    generate(cli)
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn resolve_format(opt: FormatOpt, out: &std::path::Path) -> Result<ArtifactFormat> {
    Ok(match opt {
        FormatOpt::Auto => ArtifactFormat::from_path(out)?,
        FormatOpt::Rust => ArtifactFormat::Rust,
        FormatOpt::C => ArtifactFormat::CHeader,
        FormatOpt::Json => ArtifactFormat::Json,
    })
}

fn generate(cli: Cli) -> Result<()> {
    let exponent = cli.exponent.ok_or(LutError::MissingArgument)?;
    let format = resolve_format(cli.format, &cli.out)?;

    // Build before touching the filesystem so a bad exponent leaves nothing behind.
    let table = CosineTable::build(exponent)
        .with_context(|| format!("building cosine table for FFT_EXPONENT={exponent}"))?;

    info!(
        exponent,
        size = table.size(),
        ?format,
        out = %cli.out.display(),
        "writing cosine table"
    );
    write_artifact(&cli.out, &table, format, cli.value_type.into())
        .with_context(|| format!("writing {:?} artifact to {}", format, cli.out.display()))?;

    println!(
        "Generated LUT_SIZE={} for FFT_EXPONENT={} → {}",
        table.size(),
        exponent,
        cli.out.display()
    );
    Ok(())
}
