//! Typed template records
//!
//! Each template with rules or KPIs gets a statically shaped record whose
//! fields are the raw column text. Traders are only schema-checked. Numeric columns stay as text here and are parsed by the
//! rule validators, so a bad number can be reported against its field.

use serde::Deserialize;

use super::amount::Amount;
use super::template::Template;
use crate::error::{BizCheckError, BizCheckResult};

/// A row of `sales_data.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalesRecord {
    pub transaction_id: String,
    pub date: String,
    pub market: String,
    pub trader_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity_sold: String,
    pub unit_price: String,
    pub total_sales: String,
    pub payment_method: String,
}

/// A row of `purchase_data.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PurchaseRecord {
    pub purchase_id: String,
    pub date: String,
    pub trader_id: String,
    pub supplier_name: String,
    pub supplier_phone: String,
    pub product_name: String,
    pub quantity_bought: String,
    pub unit_cost: String,
    pub total_purchase_cost: String,
}

/// A row of `inventory.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryRecord {
    pub product_name: String,
    pub category: String,
    pub opening_stock: String,
    pub quantity_purchased: String,
    pub quantity_sold: String,
    pub current_stock: String,
    pub reorder_level: String,
    pub stock_status: String,
}

/// A row of `expenses.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpenseRecord {
    pub expense_id: String,
    pub date: String,
    pub trader_id: String,
    pub expense_category: String,
    pub amount: String,
    pub notes: String,
}

/// Parse a numeric field, attributing failures to the row and column
pub fn parse_field(
    template: Template,
    row_id: &str,
    field: &'static str,
    value: &str,
) -> BizCheckResult<Amount> {
    Amount::parse(value).map_err(|_| BizCheckError::MalformedNumber {
        template,
        row_id: row_id.to_string(),
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_ok() {
        let amount = parse_field(Template::Sales, "S1", "unit_price", " 12.50 ").unwrap();
        assert_eq!(amount.to_string(), "12.50");
    }

    #[test]
    fn test_parse_field_names_context() {
        let err = parse_field(Template::Purchases, "P7", "unit_cost", "ten").unwrap_err();
        match err {
            BizCheckError::MalformedNumber {
                template,
                row_id,
                field,
                value,
            } => {
                assert_eq!(template, Template::Purchases);
                assert_eq!(row_id, "P7");
                assert_eq!(field, "unit_cost");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
