//! Raw template rows
//!
//! A template file is held as its header record plus one `Row` per data
//! line. Rows are read once and never mutated.

use csv::StringRecord;
use serde::de::DeserializeOwned;

use super::template::Template;
use crate::error::{BizCheckError, BizCheckResult};

/// One data line of a template, with its source line number
#[derive(Debug, Clone)]
pub struct Row {
    line: u64,
    record: StringRecord,
}

impl Row {
    /// Create a row from a parsed record
    pub fn new(line: u64, record: StringRecord) -> Self {
        Self { line, record }
    }
}

/// The contents of one template file
#[derive(Debug, Clone)]
pub struct TemplateData {
    template: Template,
    headers: StringRecord,
    rows: Vec<Row>,
}

impl TemplateData {
    /// Create template data from a header record and its rows
    pub fn new(template: Template, headers: StringRecord, rows: Vec<Row>) -> Self {
        Self {
            template,
            headers,
            rows,
        }
    }

    /// Which template this data was read for
    pub fn template(&self) -> Template {
        self.template
    }

    /// Column names from the file's header line
    pub fn headers(&self) -> Vec<String> {
        self.headers.iter().map(str::to_string).collect()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names of the first row, if there is one
    ///
    /// Every row is keyed by the header line, so this is the header whenever
    /// at least one data row exists.
    pub fn first_row_columns(&self) -> Option<Vec<String>> {
        self.rows.first().map(|_| self.headers())
    }

    /// Read every row into the template's typed record
    ///
    /// Only meaningful after the header has been checked against the
    /// expected columns; a missing column surfaces as a `Csv` error.
    pub fn records<T: DeserializeOwned>(&self) -> BizCheckResult<Vec<T>> {
        self.rows
            .iter()
            .map(|row| {
                row.record
                    .deserialize(Some(&self.headers))
                    .map_err(|e| BizCheckError::Csv {
                        template: self.template,
                        message: format!("line {}: {}", row.line, e),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalesRecord;

    fn sample() -> TemplateData {
        let headers = StringRecord::from(vec![
            "transaction_id",
            "date",
            "market",
            "trader_id",
            "product_name",
            "category",
            "quantity_sold",
            "unit_price",
            "total_sales",
            "payment_method",
        ]);
        let row = Row::new(
            2,
            StringRecord::from(vec![
                "S001", "2024-01-05", "Singa", "T01", "Rice, 5kg", "Agro", "3", "12.50", "37.50",
                "Cash",
            ]),
        );
        TemplateData::new(Template::Sales, headers, vec![row])
    }

    #[test]
    fn test_record_error_names_line() {
        let headers = StringRecord::from(vec!["transaction_id", "date"]);
        let row = Row::new(4, StringRecord::from(vec!["S001", "2024-01-05"]));
        let data = TemplateData::new(Template::Sales, headers, vec![row]);

        let err = data.records::<SalesRecord>().unwrap_err();
        match err {
            BizCheckError::Csv { template, message } => {
                assert_eq!(template, Template::Sales);
                assert!(message.starts_with("line 4: "), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_row_columns() {
        let data = sample();
        assert_eq!(data.first_row_columns().unwrap()[0], "transaction_id");

        let empty = TemplateData::new(Template::Sales, data.headers.clone(), Vec::new());
        assert!(empty.first_row_columns().is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_typed_records() {
        let records: Vec<SalesRecord> = sample().records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transaction_id, "S001");
        assert_eq!(records[0].product_name, "Rice, 5kg");
        assert_eq!(records[0].total_sales, "37.50");
    }
}
