//! Shared sample data for service tests
//!
//! A small dataset that passes every check. Expected snapshot:
//! revenue 112.750, purchases 106.00, expenses 7.75, gross profit -1.000,
//! two active traders, two products at risk, Sabon_Gari 12.50, Singa 100.250.

use crate::models::Template;
use crate::storage::MemorySource;

pub const SALES: &str = "\
transaction_id,date,market,trader_id,product_name,category,quantity_sold,unit_price,total_sales,payment_method
S001,2024-01-05,Singa,T01,Rice,Agro,3,12.50,37.50,Cash
S002,2024-01-05,Sabon_Gari,T02,\"Soap, bar\",FMCG,10,1.25,12.50,POS
S003,2024-01-06,Singa,T01,Beans,Agro,2,31.375,62.750,Transfer
";

pub const PURCHASES: &str = "\
purchase_id,date,trader_id,supplier_name,supplier_phone,product_name,quantity_bought,unit_cost,total_purchase_cost
P001,2024-01-02,T01,Agro Supplies,0801,Rice,10,9.00,90.00
P002,2024-01-03,T03,Clean Co,0802,Soap,20,0.80,16.00
";

pub const INVENTORY: &str = "\
product_name,category,opening_stock,quantity_purchased,quantity_sold,current_stock,reorder_level,stock_status
Rice,Agro,10,5,8,7,7,Restock_Needed
Soap,FMCG,50,20,10,60,15,OK
Beans,Agro,4,0,2,2,5,Restock_Needed
";

pub const EXPENSES: &str = "\
expense_id,date,trader_id,expense_category,amount,notes
E001,2024-01-04,T01,Transport,5.50,Bus fare
E002,2024-01-05,T04,Rent,2.25,\"Stall, weekly\"
";

pub const TRADERS: &str = "\
trader_id,trader_name,market,phone,business_type
T01,Musa Bello,Singa,0803,Retail
T02,\"Okafor, Ada\",Sabon_Gari,0805,Wholesale
T05,Idle Trader,Singa,0807,Retail
";

/// A source holding the full valid dataset
pub fn valid_source() -> MemorySource {
    MemorySource::new()
        .with(Template::Sales, SALES)
        .with(Template::Purchases, PURCHASES)
        .with(Template::Inventory, INVENTORY)
        .with(Template::Expenses, EXPENSES)
        .with(Template::Traders, TRADERS)
}

/// Header line of a template followed by the given data lines
pub fn with_rows(template: Template, rows: &[&str]) -> String {
    let mut csv = template.expected_columns().join(",");
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}
