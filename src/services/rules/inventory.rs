//! Inventory rules
//!
//! Stock must balance (`opening + purchased - sold == current`) and the
//! stored status must follow the reorder threshold, which is inclusive: a
//! product sitting exactly at its reorder level needs restocking.

use super::{overflow, require_equal, RowRuleValidator};
use crate::error::{BizCheckError, BizCheckResult};
use crate::models::{
    parse_field, Amount, InventoryRecord, Template, STATUS_OK, STATUS_RESTOCK_NEEDED,
};

const TEMPLATE: Template = Template::Inventory;

/// Status a product should carry for the given stock and reorder level
pub fn expected_status(current_stock: Amount, reorder_level: Amount) -> &'static str {
    if current_stock <= reorder_level {
        STATUS_RESTOCK_NEEDED
    } else {
        STATUS_OK
    }
}

/// Validator for `inventory.csv`
///
/// Yields the number of products at or below their reorder level.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryRules;

impl InventoryRules {
    /// Check a single inventory row, returning whether it needs restocking
    pub fn check_record(&self, record: &InventoryRecord) -> BizCheckResult<bool> {
        let id = record.product_name.as_str();

        let opening = parse_field(TEMPLATE, id, "opening_stock", &record.opening_stock)?;
        let purchased = parse_field(TEMPLATE, id, "quantity_purchased", &record.quantity_purchased)?;
        let sold = parse_field(TEMPLATE, id, "quantity_sold", &record.quantity_sold)?;
        let expected_stock = opening
            .checked_add(purchased)
            .and_then(|stock| stock.checked_sub(sold))
            .ok_or_else(|| overflow(TEMPLATE, id, "current_stock"))?;
        let current = parse_field(TEMPLATE, id, "current_stock", &record.current_stock)?;

        require_equal(TEMPLATE, id, "current_stock", expected_stock, current)?;

        let reorder_level = parse_field(TEMPLATE, id, "reorder_level", &record.reorder_level)?;
        let status = expected_status(current, reorder_level);
        if record.stock_status != status {
            return Err(BizCheckError::StatusMismatch {
                template: TEMPLATE,
                row_id: id.to_string(),
                expected: status.to_string(),
                actual: record.stock_status.clone(),
            });
        }

        Ok(status == STATUS_RESTOCK_NEEDED)
    }
}

impl RowRuleValidator for InventoryRules {
    type Record = InventoryRecord;
    type Output = usize;

    fn template(&self) -> Template {
        TEMPLATE
    }

    fn validate(&self, records: &[InventoryRecord]) -> BizCheckResult<usize> {
        let mut at_risk = 0;
        for record in records {
            if self.check_record(record)? {
                at_risk += 1;
            }
        }
        Ok(at_risk)
    }
}
