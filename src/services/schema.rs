//! Schema validation
//!
//! Confirms that each template's header row matches its expected column list
//! exactly, in order and case.

use crate::error::{BizCheckError, BizCheckResult};
use crate::models::{Template, TemplateData};
use crate::storage::TemplateSource;

/// Every template's rows, loaded once and schema-checked
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub sales: TemplateData,
    pub purchases: TemplateData,
    pub inventory: TemplateData,
    pub expenses: TemplateData,
    pub traders: TemplateData,
}

impl TemplateSet {
    /// Get the data of one template
    pub fn get(&self, template: Template) -> &TemplateData {
        match template {
            Template::Sales => &self.sales,
            Template::Purchases => &self.purchases,
            Template::Inventory => &self.inventory,
            Template::Expenses => &self.expenses,
            Template::Traders => &self.traders,
        }
    }
}

/// Check one template's loaded data against its expected columns
///
/// The actual header is taken from the first row. A file with no data rows
/// passes as-is, which lets freshly created templates validate before any
/// data has been entered.
pub fn check_header(data: &TemplateData) -> BizCheckResult<()> {
    let template = data.template();
    let expected = template.expected_columns();

    let Some(actual) = data.first_row_columns() else {
        return Ok(());
    };

    if actual != expected {
        return Err(BizCheckError::schema_mismatch(template, actual));
    }

    Ok(())
}

/// Service for header checks
pub struct SchemaValidator<'a, S: TemplateSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: TemplateSource + ?Sized> SchemaValidator<'a, S> {
    /// Create a new schema validator
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Load and check one template
    pub fn load_checked(&self, template: Template) -> BizCheckResult<TemplateData> {
        let data = self.source.load(template)?;
        tracing::debug!(template = %template, rows = data.len(), "loaded template");
        check_header(&data)?;
        Ok(data)
    }

    /// Load and check every template in order, stopping at the first failure
    pub fn check_all(&self) -> BizCheckResult<TemplateSet> {
        Ok(TemplateSet {
            sales: self.load_checked(Template::Sales)?,
            purchases: self.load_checked(Template::Purchases)?,
            inventory: self.load_checked(Template::Inventory)?,
            expenses: self.load_checked(Template::Expenses)?,
            traders: self.load_checked(Template::Traders)?,
        })
    }
}
