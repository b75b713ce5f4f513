//! Template definitions
//!
//! The five CSV templates the checker knows about, their file names, and the
//! exact ordered column lists each one must carry. These tables are static
//! configuration, not user data.

use std::fmt;

/// Markets a sales row may be recorded in
pub const MARKETS: &[&str] = &["Singa", "Sabon_Gari"];

/// Product categories a sales row may carry
pub const CATEGORIES: &[&str] = &["FMCG", "Agro"];

/// Accepted payment methods for a sale
pub const PAYMENT_METHODS: &[&str] = &["Cash", "Transfer", "POS"];

/// Stock status for a product above its reorder level
pub const STATUS_OK: &str = "OK";

/// Stock status for a product at or below its reorder level
pub const STATUS_RESTOCK_NEEDED: &str = "Restock_Needed";

const SALES_COLUMNS: &[&str] = &[
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
];

const PURCHASE_COLUMNS: &[&str] = &[
    "purchase_id",
    "date",
    "trader_id",
    "supplier_name",
    "supplier_phone",
    "product_name",
    "quantity_bought",
    "unit_cost",
    "total_purchase_cost",
];

const INVENTORY_COLUMNS: &[&str] = &[
    "product_name",
    "category",
    "opening_stock",
    "quantity_purchased",
    "quantity_sold",
    "current_stock",
    "reorder_level",
    "stock_status",
];

const EXPENSE_COLUMNS: &[&str] = &[
    "expense_id",
    "date",
    "trader_id",
    "expense_category",
    "amount",
    "notes",
];

const TRADER_COLUMNS: &[&str] = &["trader_id", "trader_name", "market", "phone", "business_type"];

/// One of the named CSV templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Template {
    Sales,
    Purchases,
    Inventory,
    Expenses,
    Traders,
}

impl Template {
    /// All templates in the order they are checked
    pub const ALL: [Template; 5] = [
        Template::Sales,
        Template::Purchases,
        Template::Inventory,
        Template::Expenses,
        Template::Traders,
    ];

    /// File name of the template inside the templates directory
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Sales => "sales_data.csv",
            Self::Purchases => "purchase_data.csv",
            Self::Inventory => "inventory.csv",
            Self::Expenses => "expenses.csv",
            Self::Traders => "traders.csv",
        }
    }

    /// Expected header, in order
    pub const fn expected_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Sales => SALES_COLUMNS,
            Self::Purchases => PURCHASE_COLUMNS,
            Self::Inventory => INVENTORY_COLUMNS,
            Self::Expenses => EXPENSE_COLUMNS,
            Self::Traders => TRADER_COLUMNS,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
