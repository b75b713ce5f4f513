//! Storage layer for bizcheck
//!
//! Templates reach the checker through the `TemplateSource` trait. The
//! directory-backed source reads the CSV files under `TemplatePaths`; the
//! in-memory source serves CSV text directly.

pub mod file_io;
pub mod init;

pub use file_io::{read_template_csv, read_template_file, write_header_atomic};
pub use init::{initialize_templates, InitOutcome};

use std::collections::HashMap;

use crate::config::paths::TemplatePaths;
use crate::error::{BizCheckError, BizCheckResult};
use crate::models::{Template, TemplateData};

/// Something that can hand out the contents of a template
pub trait TemplateSource {
    /// Load all rows of one template
    fn load(&self, template: Template) -> BizCheckResult<TemplateData>;
}

/// Reads templates from CSV files in the templates directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    paths: TemplatePaths,
}

impl DirectorySource {
    /// Create a new directory source
    pub fn new(paths: TemplatePaths) -> Self {
        Self { paths }
    }
}

impl TemplateSource for DirectorySource {
    fn load(&self, template: Template) -> BizCheckResult<TemplateData> {
        read_template_file(template, self.paths.template_file(template))
    }
}

/// Serves templates from CSV text held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<Template, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the CSV text of a template
    pub fn with(mut self, template: Template, csv: impl Into<String>) -> Self {
        self.files.insert(template, csv.into());
        self
    }

    /// Remove a template, so loading it reports it missing
    pub fn without(mut self, template: Template) -> Self {
        self.files.remove(&template);
        self
    }
}

impl TemplateSource for MemorySource {
    fn load(&self, template: Template) -> BizCheckResult<TemplateData> {
        let csv = self
            .files
            .get(&template)
            .ok_or_else(|| BizCheckError::MissingTemplate {
                path: template.file_name().into(),
            })?;
        read_template_csv(template, csv.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("traders.csv"),
            "trader_id,trader_name,market,phone,business_type\nT01,Musa,Singa,0803,Retail\n",
        )
        .unwrap();

        let source = DirectorySource::new(TemplatePaths::with_dir(temp_dir.path()));
        let data = source.load(Template::Traders).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.template(), Template::Traders);
    }

    #[test]
    fn test_directory_source_missing_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let source = DirectorySource::new(TemplatePaths::with_dir(temp_dir.path()));

        let err = source.load(Template::Inventory).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Missing required template: {}",
                temp_dir.path().join("inventory.csv").display()
            )
        );
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with(Template::Expenses, "expense_id,date,trader_id,expense_category,amount,notes\n")
            .with(Template::Traders, "trader_id\n")
            .without(Template::Traders);

        assert!(source.load(Template::Expenses).unwrap().is_empty());
        assert!(matches!(
            source.load(Template::Traders),
            Err(BizCheckError::MissingTemplate { .. })
        ));
    }
}
