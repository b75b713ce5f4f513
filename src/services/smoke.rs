//! Smoke test orchestration
//!
//! Runs the stages in a fixed order, stopping at the first failure:
//! schema check, sales rules, purchase rules, inventory rules, aggregation.
//! Reporting the result is left to the caller.

use std::fmt;

use crate::error::BizCheckResult;
use crate::models::{ExpenseRecord, Template, TemplateData};
use crate::reports::SmokeResult;
use crate::storage::TemplateSource;

use super::aggregate::Aggregator;
use super::rules::{InventoryRules, PurchaseRules, RowRuleValidator, SalesRules};
use super::schema::{SchemaValidator, TemplateSet};

/// Stages of a run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SchemaCheck,
    SalesRules,
    PurchaseRules,
    InventoryRules,
    Aggregate,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SchemaCheck => "schema check",
            Self::SalesRules => "sales rules",
            Self::PurchaseRules => "purchase rules",
            Self::InventoryRules => "inventory rules",
            Self::Aggregate => "aggregate",
            Self::Report => "report",
        };
        f.write_str(name)
    }
}

/// Row counts per template after a successful schema check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSummary {
    pub templates: Vec<(Template, usize)>,
}

/// Service that runs the full smoke test
pub struct SmokeTestService<'a, S: TemplateSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: TemplateSource + ?Sized> SmokeTestService<'a, S> {
    /// Create a new smoke test service
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Run only the schema check
    pub fn check_schema(&self) -> BizCheckResult<SchemaSummary> {
        let set = stage(Stage::SchemaCheck, || {
            SchemaValidator::new(self.source).check_all()
        })?;

        Ok(SchemaSummary {
            templates: Template::ALL
                .iter()
                .map(|&t| (t, set.get(t).len()))
                .collect(),
        })
    }

    /// Run every stage and return the KPI snapshot
    pub fn run(&self) -> BizCheckResult<SmokeResult> {
        let set: TemplateSet = stage(Stage::SchemaCheck, || {
            SchemaValidator::new(self.source).check_all()
        })?;

        let (sales, ()) = stage(Stage::SalesRules, || apply(&SalesRules, &set.sales))?;
        let (purchases, ()) =
            stage(Stage::PurchaseRules, || apply(&PurchaseRules, &set.purchases))?;
        let (_, products_at_risk) =
            stage(Stage::InventoryRules, || apply(&InventoryRules, &set.inventory))?;

        let result = stage(Stage::Aggregate, || {
            let expenses: Vec<ExpenseRecord> = set.expenses.records()?;
            Aggregator::new(&sales, &purchases, &expenses).aggregate(products_at_risk)
        })?;

        tracing::info!(
            stage = %Stage::Report,
            active_traders = result.active_traders,
            products_at_risk = result.products_at_risk,
            "all checks passed"
        );
        Ok(result)
    }
}

/// Read a template's typed records and run its validator over them
fn apply<V: RowRuleValidator>(
    validator: &V,
    data: &TemplateData,
) -> BizCheckResult<(Vec<V::Record>, V::Output)> {
    debug_assert_eq!(validator.template(), data.template());
    let records: Vec<V::Record> = data.records()?;
    let output = validator.validate(&records)?;
    tracing::debug!(template = %validator.template(), rows = records.len(), "rules passed");
    Ok((records, output))
}

/// Run one stage, logging entry and any failure
///
/// The failure itself is reported by the caller, so it is only traced here.
fn stage<T>(stage: Stage, f: impl FnOnce() -> BizCheckResult<T>) -> BizCheckResult<T> {
    tracing::info!(stage = %stage, "starting");
    f().map_err(|e| {
        tracing::debug!(stage = %stage, error = %e, "stage failed");
        e
    })
}
