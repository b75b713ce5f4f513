//! Core data models for bizcheck
//!
//! Templates and their column tables, raw rows, typed per-template records,
//! and the exact decimal type used for all arithmetic.

pub mod amount;
pub mod records;
pub mod row;
pub mod template;

pub use amount::{Amount, AmountParseError};
pub use records::{
    parse_field, ExpenseRecord, InventoryRecord, PurchaseRecord, SalesRecord,
};
pub use row::{Row, TemplateData};
pub use template::{
    Template, CATEGORIES, MARKETS, PAYMENT_METHODS, STATUS_OK, STATUS_RESTOCK_NEEDED,
};
