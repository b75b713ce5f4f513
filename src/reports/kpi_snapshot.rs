//! KPI Snapshot
//!
//! The summary computed from a fully validated dataset, with terminal, CSV
//! and JSON renderings.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{BizCheckError, BizCheckResult};
use crate::models::Amount;

/// KPI snapshot of one validated dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmokeResult {
    /// Sum of `total_sales` over all sales rows
    pub total_revenue: Amount,
    /// Sum of `total_purchase_cost` over all purchase rows
    pub total_purchase_cost: Amount,
    /// Sum of `amount` over all expense rows
    pub total_expenses: Amount,
    /// Revenue less purchase cost less expenses
    pub gross_profit: Amount,
    /// Distinct traders with at least one sale
    pub active_traders: usize,
    /// Revenue per market, ordered by market name
    pub revenue_by_market: BTreeMap<String, Amount>,
    /// Products at or below their reorder level
    pub products_at_risk: usize,
}

impl SmokeResult {
    /// Format the snapshot for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("KPI Snapshot (sample rows):\n");
        output.push_str(&format!("- Total Revenue: {}\n", self.total_revenue));
        output.push_str(&format!(
            "- Total Purchase Cost: {}\n",
            self.total_purchase_cost
        ));
        output.push_str(&format!("- Total Expenses: {}\n", self.total_expenses));
        output.push_str(&format!("- Gross Profit: {}\n", self.gross_profit));
        output.push_str(&format!("- Active Traders: {}\n", self.active_traders));
        output.push_str(&format!("- Products At Risk: {}\n", self.products_at_risk));
        output.push_str("- Revenue by Market:\n");
        for (market, amount) in &self.revenue_by_market {
            output.push_str(&format!("  - {}: {}\n", market, amount));
        }

        output
    }

    /// Export the snapshot to CSV format
    ///
    /// One `metric,value` row per KPI in report order, then one
    /// `market:<name>,value` row per market.
    pub fn export_csv<W: Write>(&self, writer: W) -> BizCheckResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| BizCheckError::Export(e.to_string());

        csv.write_record(["metric", "value"]).map_err(export_err)?;

        let scalars = [
            ("total_revenue", self.total_revenue.to_string()),
            ("total_purchase_cost", self.total_purchase_cost.to_string()),
            ("total_expenses", self.total_expenses.to_string()),
            ("gross_profit", self.gross_profit.to_string()),
            ("active_traders", self.active_traders.to_string()),
            ("products_at_risk", self.products_at_risk.to_string()),
        ];
        for (metric, value) in &scalars {
            csv.write_record([*metric, value.as_str()])
                .map_err(export_err)?;
        }

        for (market, amount) in &self.revenue_by_market {
            csv.write_record([format!("market:{}", market), amount.to_string()])
                .map_err(export_err)?;
        }

        csv.flush()
            .map_err(|e| BizCheckError::Export(e.to_string()))?;
        Ok(())
    }

    /// Serialize the snapshot as pretty-printed JSON
    pub fn to_json(&self) -> BizCheckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    fn sample() -> SmokeResult {
        let mut revenue_by_market = BTreeMap::new();
        revenue_by_market.insert("Singa".to_string(), amt("150.25"));
        revenue_by_market.insert("Sabon_Gari".to_string(), amt("20.00"));

        SmokeResult {
            total_revenue: amt("170.25"),
            total_purchase_cost: amt("100.00"),
            total_expenses: amt("10.50"),
            gross_profit: amt("59.75"),
            active_traders: 2,
            revenue_by_market,
            products_at_risk: 1,
        }
    }

    #[test]
    fn test_format_terminal_order() {
        let text = sample().format_terminal();
        assert_eq!(
            text,
            "KPI Snapshot (sample rows):\n\
             - Total Revenue: 170.25\n\
             - Total Purchase Cost: 100.00\n\
             - Total Expenses: 10.50\n\
             - Gross Profit: 59.75\n\
             - Active Traders: 2\n\
             - Products At Risk: 1\n\
             - Revenue by Market:\n  \
             - Sabon_Gari: 20.00\n  \
             - Singa: 150.25\n"
        );
    }

    #[test]
    fn test_export_csv() {
        let mut buf = Vec::new();
        sample().export_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "metric,value");
        assert_eq!(lines[1], "total_revenue,170.25");
        assert_eq!(lines[6], "products_at_risk,1");
        assert_eq!(lines[7], "market:Sabon_Gari,20.00");
        assert_eq!(lines[8], "market:Singa,150.25");
    }

    #[test]
    fn test_json_keeps_exact_decimals() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["gross_profit"], "59.75");
        assert_eq!(value["total_purchase_cost"], "100.00");
        assert_eq!(value["revenue_by_market"]["Singa"], "150.25");
        assert_eq!(value["active_traders"], 2);
    }
}
