//! Sales rules
//!
//! Market, category and payment method must come from their allowed sets,
//! and `total_sales` must equal `quantity_sold * unit_price` exactly.

use super::{overflow, require_equal, require_member, RowRuleValidator};
use crate::error::BizCheckResult;
use crate::models::{parse_field, SalesRecord, Template, CATEGORIES, MARKETS, PAYMENT_METHODS};

const TEMPLATE: Template = Template::Sales;

/// Validator for `sales_data.csv`
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesRules;

impl SalesRules {
    /// Check a single sales row
    pub fn check_record(&self, record: &SalesRecord) -> BizCheckResult<()> {
        let id = record.transaction_id.as_str();

        require_member(TEMPLATE, id, "market", &record.market, MARKETS)?;
        require_member(TEMPLATE, id, "category", &record.category, CATEGORIES)?;
        require_member(
            TEMPLATE,
            id,
            "payment_method",
            &record.payment_method,
            PAYMENT_METHODS,
        )?;

        let quantity = parse_field(TEMPLATE, id, "quantity_sold", &record.quantity_sold)?;
        let unit_price = parse_field(TEMPLATE, id, "unit_price", &record.unit_price)?;
        let expected = quantity
            .checked_mul(unit_price)
            .ok_or_else(|| overflow(TEMPLATE, id, "total_sales"))?;
        let actual = parse_field(TEMPLATE, id, "total_sales", &record.total_sales)?;

        require_equal(TEMPLATE, id, "total_sales", expected, actual)
    }
}

impl RowRuleValidator for SalesRules {
    type Record = SalesRecord;
    type Output = ();

    fn template(&self) -> Template {
        TEMPLATE
    }

    fn validate(&self, records: &[SalesRecord]) -> BizCheckResult<()> {
        records.iter().try_for_each(|r| self.check_record(r))
    }
}
