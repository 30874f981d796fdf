use anyhow::{Context, Result};
use bankimport::{parse, ParseOptions};
use std::{env, fs, path::Path};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bankimport=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) arguments ────────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let csv_path = args
        .next()
        .context("Usage: bankimport <CSV_PATH> [OPTIONS_YAML]")?;
    let options = match args.next() {
        Some(path) => ParseOptions::from_yaml_file(&path)?,
        None => ParseOptions::default(),
    };

    // ─── 3) read + parse ─────────────────────────────────────────────
    let csv_path = Path::new(&csv_path);
    let data = fs::read_to_string(csv_path)
        .with_context(|| format!("Failed to read {}", csv_path.display()))?;
    let result = parse(&data, &options)
        .with_context(|| format!("Failed to parse {}", csv_path.display()))?;
    info!(
        file = %csv_path.display(),
        rows = result.records.len(),
        columns = result.num_columns,
        header = result.header.is_some(),
        "parsed statement"
    );
    let types: Vec<String> = result
        .column_types
        .iter()
        .map(|t| t.map_or_else(|| "mixed".to_string(), |t| t.to_string()))
        .collect();
    debug!(column_types = %types.join(","), "column types");

    // ─── 4) emit JSON ────────────────────────────────────────────────
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
