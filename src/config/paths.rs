//! Path management for bizcheck
//!
//! Resolves the directory holding the CSV templates.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (`--templates-dir`, or `BIZCHECK_TEMPLATES_DIR`
//!    which clap reads into the same flag)
//! 2. `excel_templates` under the current working directory

use std::path::{Path, PathBuf};

use crate::error::BizCheckError;
use crate::models::Template;

/// Directory name used when nothing else is configured
pub const DEFAULT_TEMPLATES_DIR: &str = "excel_templates";

/// Manages the paths of all template files
#[derive(Debug, Clone)]
pub struct TemplatePaths {
    templates_dir: PathBuf,
}

impl TemplatePaths {
    /// Create a new TemplatePaths instance at `./excel_templates`
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, BizCheckError> {
        let templates_dir = std::env::current_dir()
            .map_err(|e| {
                BizCheckError::Config(format!("Could not determine current directory: {}", e))
            })?
            .join(DEFAULT_TEMPLATES_DIR);

        Ok(Self { templates_dir })
    }

    /// Create TemplatePaths for an explicit directory
    pub fn with_dir(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Resolve from an optional explicit directory
    pub fn resolve(cli_dir: Option<PathBuf>) -> Result<Self, BizCheckError> {
        match cli_dir {
            Some(dir) => Ok(Self::with_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the templates directory
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Get the path of one template file
    pub fn template_file(&self, template: Template) -> PathBuf {
        self.templates_dir.join(template.file_name())
    }

    /// Ensure the templates directory exists
    pub fn ensure_directory(&self) -> Result<(), BizCheckError> {
        std::fs::create_dir_all(&self.templates_dir).map_err(|e| {
            BizCheckError::Io(format!(
                "Failed to create templates directory {}: {}",
                self.templates_dir.display(),
                e
            ))
        })
    }
}
