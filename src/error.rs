//! Custom error types for bizcheck
//!
//! This module defines the error hierarchy for the checker using thiserror.
//! Every variant carries enough context (template, row key, field, expected
//! and actual values) to locate and fix the offending data on its own.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Amount, Template};

/// The main error type for bizcheck operations
#[derive(Error, Debug)]
pub enum BizCheckError {
    /// A configured template file does not exist
    #[error("Missing required template: {}", .path.display())]
    MissingTemplate { path: PathBuf },

    /// Header row differs from the expected column list
    #[error(
        "{template} column mismatch.\nExpected: {}\nActual:   {}",
        format_columns(.expected),
        format_columns(.actual)
    )]
    SchemaMismatch {
        template: Template,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// A numeric field could not be parsed as a decimal
    #[error("Malformed number in {template} for {row_id}: {field} = '{value}'")]
    MalformedNumber {
        template: Template,
        row_id: String,
        field: &'static str,
        value: String,
    },

    /// A field holds a value outside its allowed set
    #[error("Invalid {field} in {template} for {row_id}: {value}")]
    InvalidCategoricalValue {
        template: Template,
        row_id: String,
        field: &'static str,
        value: String,
    },

    /// A stored total or stock figure disagrees with the recomputed one
    #[error("{field} mismatch in {template} for {row_id}: expected {expected}, got {actual}")]
    ArithmeticMismatch {
        template: Template,
        row_id: String,
        field: &'static str,
        expected: Amount,
        actual: Amount,
    },

    /// Stored stock status disagrees with the reorder threshold
    #[error("stock_status mismatch in {template} for {row_id}: expected {expected}, got {actual}")]
    StatusMismatch {
        template: Template,
        row_id: String,
        expected: String,
        actual: String,
    },

    /// A computation left the decimal range or could not be held without rounding
    #[error("Decimal range exceeded in {template} for {row_id} while computing {field}")]
    Overflow {
        template: Template,
        row_id: String,
        field: &'static str,
    },

    /// The file is not well-formed CSV
    #[error("CSV error in {template}: {message}")]
    Csv { template: Template, message: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn format_columns(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}

impl BizCheckError {
    /// Create a schema mismatch error from static expected columns
    pub fn schema_mismatch(template: Template, actual: Vec<String>) -> Self {
        Self::SchemaMismatch {
            template,
            expected: template
                .expected_columns()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            actual,
        }
    }

    /// Check if this error is a defect in the templates rather than an
    /// environment problem
    ///
    /// The binary exits with status 1 for these and 2 for everything else.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingTemplate { .. }
                | Self::SchemaMismatch { .. }
                | Self::MalformedNumber { .. }
                | Self::InvalidCategoricalValue { .. }
                | Self::ArithmeticMismatch { .. }
                | Self::StatusMismatch { .. }
                | Self::Overflow { .. }
                | Self::Csv { .. }
        )
    }
}

impl From<std::io::Error> for BizCheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BizCheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for bizcheck operations
pub type BizCheckResult<T> = Result<T, BizCheckError>;
