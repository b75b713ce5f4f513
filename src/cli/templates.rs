//! CLI commands for template files
//!
//! Lists the expected schemas and creates header-only templates.

use crate::config::TemplatePaths;
use crate::error::BizCheckResult;
use crate::models::Template;
use crate::storage::initialize_templates;

/// Handle the templates command
pub fn handle_templates_command(paths: &TemplatePaths) -> BizCheckResult<()> {
    println!("Templates directory: {}", paths.templates_dir().display());
    println!();

    for template in Template::ALL {
        let status = if paths.template_file(template).exists() {
            "present"
        } else {
            "missing"
        };
        println!("{} ({})", template, status);
        println!("  {}", template.expected_columns().join(", "));
    }

    Ok(())
}

/// Handle the init command
pub fn handle_init_command(paths: &TemplatePaths, force: bool) -> BizCheckResult<()> {
    println!(
        "Initializing templates at: {}",
        paths.templates_dir().display()
    );

    let outcome = initialize_templates(paths, force)?;

    for template in &outcome.created {
        println!("  created  {}", template);
    }
    for template in &outcome.skipped {
        println!("  kept     {} (already exists, use --force to overwrite)", template);
    }

    println!();
    println!("Run 'bizcheck schema' to confirm the headers.");

    Ok(())
}
