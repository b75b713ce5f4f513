//! Template initialization
//!
//! Creates header-only template files so data entry can start from the
//! correct schema. A header-only file passes the schema check as it stands.

use crate::config::paths::TemplatePaths;
use crate::error::BizCheckError;
use crate::models::Template;

use super::file_io::write_header_atomic;

/// What `initialize_templates` did for each template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOutcome {
    /// Templates written
    pub created: Vec<Template>,
    /// Templates left alone because a file already existed
    pub skipped: Vec<Template>,
}

/// Write a header-only file for every template
///
/// Existing files are kept unless `force` is set.
pub fn initialize_templates(
    paths: &TemplatePaths,
    force: bool,
) -> Result<InitOutcome, BizCheckError> {
    paths.ensure_directory()?;

    let mut outcome = InitOutcome::default();
    for template in Template::ALL {
        let path = paths.template_file(template);
        if path.exists() && !force {
            outcome.skipped.push(template);
            continue;
        }

        write_header_atomic(&path, template.expected_columns())?;
        tracing::debug!(template = %template, path = %path.display(), "wrote template header");
        outcome.created.push(template);
    }

    Ok(outcome)
}
