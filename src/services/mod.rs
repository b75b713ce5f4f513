//! Business logic layer
//!
//! Schema validation, per-template row rules, KPI aggregation, and the
//! orchestrating smoke test service.

pub mod aggregate;
pub mod rules;
pub mod schema;
pub mod smoke;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregate::Aggregator;
pub use rules::{InventoryRules, PurchaseRules, RowRuleValidator, SalesRules};
pub use schema::{check_header, SchemaValidator, TemplateSet};
pub use smoke::{SchemaSummary, SmokeTestService, Stage};
