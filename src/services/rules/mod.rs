//! Row rule validators
//!
//! One validator per template with business rules. Each walks its records in
//! file order and stops at the first failing row. Validators never modify a
//! record.

pub mod inventory;
pub mod purchases;
pub mod sales;

pub use inventory::InventoryRules;
pub use purchases::PurchaseRules;
pub use sales::SalesRules;

use serde::de::DeserializeOwned;

use crate::error::{BizCheckError, BizCheckResult};
use crate::models::{Amount, Template};

/// Validates every row of one template
pub trait RowRuleValidator {
    /// Typed record the rules apply to
    type Record: DeserializeOwned;
    /// What a successful validation yields
    type Output;

    /// Template the rules belong to
    fn template(&self) -> Template;

    /// Check all records, returning the first failure in file order
    fn validate(&self, records: &[Self::Record]) -> BizCheckResult<Self::Output>;
}

/// Fail unless `value` is one of `allowed`
pub(crate) fn require_member(
    template: Template,
    row_id: &str,
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> BizCheckResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(BizCheckError::InvalidCategoricalValue {
            template,
            row_id: row_id.to_string(),
            field,
            value: value.to_string(),
        })
    }
}

/// Fail unless the recomputed value equals the stored one
pub(crate) fn require_equal(
    template: Template,
    row_id: &str,
    field: &'static str,
    expected: Amount,
    actual: Amount,
) -> BizCheckResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(BizCheckError::ArithmeticMismatch {
            template,
            row_id: row_id.to_string(),
            field,
            expected,
            actual,
        })
    }
}

pub(crate) fn overflow(template: Template, row_id: &str, field: &'static str) -> BizCheckError {
    BizCheckError::Overflow {
        template,
        row_id: row_id.to_string(),
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_member_is_exact() {
        assert!(require_member(Template::Sales, "S1", "market", "Singa", &["Singa"]).is_ok());
        assert!(require_member(Template::Sales, "S1", "market", "singa", &["Singa"]).is_err());
        assert!(require_member(Template::Sales, "S1", "market", " Singa", &["Singa"]).is_err());
    }

    #[test]
    fn test_require_equal_by_value() {
        let a = Amount::parse("37.5").unwrap();
        let b = Amount::parse("37.50").unwrap();
        assert!(require_equal(Template::Sales, "S1", "total_sales", a, b).is_ok());
    }
}
