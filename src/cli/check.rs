//! CLI commands for running checks
//!
//! `check` runs the full smoke test and prints the KPI snapshot; `schema`
//! stops after the header checks.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::TemplatePaths;
use crate::error::{BizCheckError, BizCheckResult};
use crate::services::SmokeTestService;
use crate::storage::DirectorySource;

/// Banner printed when every check passes
pub const PASS_BANNER: &str = "[PASS] Template schema and calculation checks passed.";

/// Output format for the snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON object with decimals as strings
    Json,
}

/// Handle the check command
pub fn handle_check_command(
    paths: &TemplatePaths,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> BizCheckResult<()> {
    let source = DirectorySource::new(paths.clone());
    let result = SmokeTestService::new(&source).run()?;

    match format {
        OutputFormat::Text => {
            println!("{}", PASS_BANNER);
            print!("{}", result.format_terminal());
        }
        OutputFormat::Json => println!("{}", result.to_json()?),
    }

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            BizCheckError::Export(format!(
                "Failed to create file {}: {}",
                path.display(),
                e
            ))
        })?;
        result.export_csv(BufWriter::new(file))?;
        eprintln!("KPI snapshot exported to: {}", path.display());
    }

    Ok(())
}

/// Handle the schema command
pub fn handle_schema_command(paths: &TemplatePaths) -> BizCheckResult<()> {
    let source = DirectorySource::new(paths.clone());
    let summary = SmokeTestService::new(&source).check_schema()?;

    println!("[PASS] Template schema checks passed.");
    println!("Templates in {}:", paths.templates_dir().display());
    for (template, rows) in &summary.templates {
        let note = if *rows == 0 { " (no data yet)" } else { "" };
        println!("- {}: {} row(s){}", template, rows, note);
    }

    Ok(())
}
