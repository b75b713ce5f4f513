//! Purchase rules

use super::{overflow, require_equal, RowRuleValidator};
use crate::error::BizCheckResult;
use crate::models::{parse_field, PurchaseRecord, Template};

const TEMPLATE: Template = Template::Purchases;

/// Validator for `purchase_data.csv`
///
/// `total_purchase_cost` must equal `quantity_bought * unit_cost` exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseRules;

impl PurchaseRules {
    /// Check a single purchase row
    pub fn check_record(&self, record: &PurchaseRecord) -> BizCheckResult<()> {
        let id = record.purchase_id.as_str();

        let quantity = parse_field(TEMPLATE, id, "quantity_bought", &record.quantity_bought)?;
        let unit_cost = parse_field(TEMPLATE, id, "unit_cost", &record.unit_cost)?;
        let expected = quantity
            .checked_mul(unit_cost)
            .ok_or_else(|| overflow(TEMPLATE, id, "total_purchase_cost"))?;
        let actual = parse_field(
            TEMPLATE,
            id,
            "total_purchase_cost",
            &record.total_purchase_cost,
        )?;

        require_equal(TEMPLATE, id, "total_purchase_cost", expected, actual)
    }
}

impl RowRuleValidator for PurchaseRules {
    type Record = PurchaseRecord;
    type Output = ();

    fn template(&self) -> Template {
        TEMPLATE
    }

    fn validate(&self, records: &[PurchaseRecord]) -> BizCheckResult<()> {
        records.iter().try_for_each(|r| self.check_record(r))
    }
}
