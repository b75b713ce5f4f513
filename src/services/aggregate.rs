//! KPI aggregation
//!
//! Folds validated sales, purchase and expense records into a `SmokeResult`.
//! Inventory arrives already reduced to its at-risk count.

use std::collections::{BTreeMap, HashSet};

use crate::error::BizCheckResult;
use crate::models::{parse_field, Amount, ExpenseRecord, PurchaseRecord, SalesRecord, Template};
use crate::reports::SmokeResult;

use super::rules::overflow;

/// Computes the KPI snapshot
pub struct Aggregator<'a> {
    sales: &'a [SalesRecord],
    purchases: &'a [PurchaseRecord],
    expenses: &'a [ExpenseRecord],
}

impl<'a> Aggregator<'a> {
    /// Create a new aggregator over validated records
    pub fn new(
        sales: &'a [SalesRecord],
        purchases: &'a [PurchaseRecord],
        expenses: &'a [ExpenseRecord],
    ) -> Self {
        Self {
            sales,
            purchases,
            expenses,
        }
    }

    /// Sum of `total_sales`
    pub fn total_revenue(&self) -> BizCheckResult<Amount> {
        sum_field(
            Template::Sales,
            "total_sales",
            self.sales
                .iter()
                .map(|r| (r.transaction_id.as_str(), r.total_sales.as_str())),
        )
    }

    /// Sum of `total_purchase_cost`
    pub fn total_purchase_cost(&self) -> BizCheckResult<Amount> {
        sum_field(
            Template::Purchases,
            "total_purchase_cost",
            self.purchases
                .iter()
                .map(|r| (r.purchase_id.as_str(), r.total_purchase_cost.as_str())),
        )
    }

    /// Sum of expense `amount`
    pub fn total_expenses(&self) -> BizCheckResult<Amount> {
        sum_field(
            Template::Expenses,
            "amount",
            self.expenses
                .iter()
                .map(|r| (r.expense_id.as_str(), r.amount.as_str())),
        )
    }

    /// Distinct traders with at least one sale
    pub fn active_traders(&self) -> usize {
        self.sales
            .iter()
            .map(|r| r.trader_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Revenue per market
    pub fn revenue_by_market(&self) -> BizCheckResult<BTreeMap<String, Amount>> {
        let mut by_market: BTreeMap<String, Amount> = BTreeMap::new();

        for record in self.sales {
            let id = record.transaction_id.as_str();
            let total = parse_field(Template::Sales, id, "total_sales", &record.total_sales)?;
            let entry = by_market
                .entry(record.market.clone())
                .or_insert_with(Amount::zero);
            *entry = entry
                .checked_add(total)
                .ok_or_else(|| overflow(Template::Sales, id, "revenue_by_market"))?;
        }

        Ok(by_market)
    }

    /// Build the full snapshot
    pub fn aggregate(&self, products_at_risk: usize) -> BizCheckResult<SmokeResult> {
        let total_revenue = self.total_revenue()?;
        let total_purchase_cost = self.total_purchase_cost()?;
        let total_expenses = self.total_expenses()?;
        let gross_profit = total_revenue
            .checked_sub(total_purchase_cost)
            .and_then(|p| p.checked_sub(total_expenses))
            .ok_or_else(|| overflow(Template::Sales, "totals", "gross_profit"))?;

        Ok(SmokeResult {
            total_revenue,
            total_purchase_cost,
            total_expenses,
            gross_profit,
            active_traders: self.active_traders(),
            revenue_by_market: self.revenue_by_market()?,
            products_at_risk,
        })
    }
}

/// Sum one numeric column starting from exact zero
fn sum_field<'r>(
    template: Template,
    field: &'static str,
    values: impl Iterator<Item = (&'r str, &'r str)>,
) -> BizCheckResult<Amount> {
    let mut total = Amount::zero();
    for (row_id, value) in values {
        let amount = parse_field(template, row_id, field, value)?;
        total = total
            .checked_add(amount)
            .ok_or_else(|| overflow(template, row_id, field))?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BizCheckError;
    use crate::services::fixtures;
    use crate::storage::TemplateSource;

    fn records<T: serde::de::DeserializeOwned>(template: Template, csv: &str) -> Vec<T> {
        fixtures::valid_source()
            .with(template, csv)
            .load(template)
            .unwrap()
            .records()
            .unwrap()
    }

    fn sale(id: &str, market: &str, trader: &str, total: &str) -> String {
        format!("{id},2024-01-05,{market},{trader},Rice,Agro,1,{total},{total},Cash")
    }

    #[test]
    fn test_revenue_by_market_sums_per_market() {
        let rows = [
            sale("S1", "Singa", "T01", "100.00"),
            sale("S2", "Singa", "T02", "50.25"),
            sale("S3", "Sabon_Gari", "T01", "9.75"),
        ];
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let sales: Vec<SalesRecord> =
            records(Template::Sales, &fixtures::with_rows(Template::Sales, &rows));

        let aggregator = Aggregator::new(&sales, &[], &[]);
        let by_market = aggregator.revenue_by_market().unwrap();

        assert_eq!(by_market["Singa"].to_string(), "150.25");
        assert_eq!(by_market["Sabon_Gari"].to_string(), "9.75");
        let markets: Vec<_> = by_market.keys().cloned().collect();
        assert_eq!(markets, vec!["Sabon_Gari", "Singa"]);
    }

    #[test]
    fn test_active_traders_only_counts_sellers() {
        let sales: Vec<SalesRecord> = records(Template::Sales, fixtures::SALES);
        let purchases: Vec<PurchaseRecord> = records(Template::Purchases, fixtures::PURCHASES);
        let expenses: Vec<ExpenseRecord> = records(Template::Expenses, fixtures::EXPENSES);

        // T03 only buys and T04 only has expenses
        let aggregator = Aggregator::new(&sales, &purchases, &expenses);
        assert_eq!(aggregator.active_traders(), 2);
    }

    #[test]
    fn test_gross_profit_identity() {
        let sales: Vec<SalesRecord> = records(Template::Sales, fixtures::SALES);
        let purchases: Vec<PurchaseRecord> = records(Template::Purchases, fixtures::PURCHASES);
        let expenses: Vec<ExpenseRecord> = records(Template::Expenses, fixtures::EXPENSES);

        let result = Aggregator::new(&sales, &purchases, &expenses)
            .aggregate(2)
            .unwrap();

        assert_eq!(result.total_revenue.to_string(), "112.750");
        assert_eq!(result.total_purchase_cost.to_string(), "106.00");
        assert_eq!(result.total_expenses.to_string(), "7.75");
        let identity = result
            .total_revenue
            .checked_sub(result.total_purchase_cost)
            .and_then(|p| p.checked_sub(result.total_expenses))
            .unwrap();
        assert_eq!(result.gross_profit, identity);
        assert_eq!(result.gross_profit.to_string(), "-1.000");
        assert_eq!(result.products_at_risk, 2);
    }

    #[test]
    fn test_empty_inputs_are_zero() {
        let result = Aggregator::new(&[], &[], &[]).aggregate(0).unwrap();

        assert_eq!(result.total_revenue, Amount::zero());
        assert_eq!(result.gross_profit, Amount::zero());
        assert_eq!(result.active_traders, 0);
        assert!(result.revenue_by_market.is_empty());
    }

    #[test]
    fn test_malformed_expense_amount() {
        let expenses: Vec<ExpenseRecord> = records(
            Template::Expenses,
            &fixtures::with_rows(Template::Expenses, &["E9,2024-01-01,T01,Rent,n/a,"]),
        );

        let err = Aggregator::new(&[], &[], &expenses).aggregate(0).unwrap_err();
        assert!(matches!(
            err,
            BizCheckError::MalformedNumber { template: Template::Expenses, field: "amount", ref row_id, .. }
                if row_id == "E9"
        ));
    }
}
