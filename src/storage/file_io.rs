//! CSV file I/O for templates
//!
//! Reads template files fully into memory and writes header-only templates
//! atomically so a crash never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{BizCheckError, BizCheckResult};
use crate::models::{Row, Template, TemplateData};

/// Parse template CSV from any reader
///
/// The first line is the header. Blank lines are skipped and every data
/// line must have as many fields as the header.
pub fn read_template_csv<R: Read>(template: Template, reader: R) -> BizCheckResult<TemplateData> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(template, e))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(template, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(Row::new(line, record));
    }

    Ok(TemplateData::new(template, headers, rows))
}

/// Read a template file, failing with `MissingTemplate` if it doesn't exist
pub fn read_template_file<P: AsRef<Path>>(
    template: Template,
    path: P,
) -> BizCheckResult<TemplateData> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BizCheckError::MissingTemplate {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)
        .map_err(|e| BizCheckError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    read_template_csv(template, BufReader::new(file))
}

/// Write a header-only template file atomically (write to temp, then rename)
pub fn write_header_atomic<P: AsRef<Path>>(path: P, columns: &[&str]) -> BizCheckResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BizCheckError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BizCheckError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer
        .write_record(columns)
        .map_err(|e| BizCheckError::Io(format!("Failed to write header: {}", e)))?;

    let mut inner = writer
        .into_inner()
        .map_err(|e| BizCheckError::Io(format!("Failed to flush header: {}", e.error())))?;
    inner
        .flush()
        .map_err(|e| BizCheckError::Io(format!("Failed to flush header: {}", e)))?;
    inner
        .get_ref()
        .sync_all()
        .map_err(|e| BizCheckError::Io(format!("Failed to sync template: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BizCheckError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn csv_error(template: Template, err: csv::Error) -> BizCheckError {
    let message = match err.position() {
        Some(pos) => format!("line {}: {}", pos.line(), err),
        None => err.to_string(),
    };
    BizCheckError::Csv { template, message }
}
