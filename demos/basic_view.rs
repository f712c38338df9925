/// Basic View Example
///
/// This example demonstrates:
/// - Declaring columns and loading a record set
/// - Paging through the records
/// - Searching and sorting the view

use recordview::{Column, ColumnSet, FieldValue, Record, RecordStore, SortDirection};

fn account(name: &str, industry: &str, revenue: Option<f64>) -> Record {
    let mut record = Record::new();
    record.insert("Name".to_string(), FieldValue::from(name));
    record.insert("Industry".to_string(), FieldValue::from(industry));
    record.insert(
        "AnnualRevenue".to_string(),
        revenue.map(FieldValue::Number).unwrap_or(FieldValue::Null),
    );
    record
}

fn print_page(store: &RecordStore) {
    let page = store.page();
    println!(
        "   Page {}/{} ({} records):",
        page.page_number,
        page.total_pages,
        page.len()
    );
    for record in &page.records {
        let name = record
            .get("Name")
            .and_then(|v| v.to_display_string())
            .unwrap_or_default();
        let revenue = record
            .get("AnnualRevenue")
            .and_then(|v| v.to_display_string())
            .unwrap_or_else(|| "-".to_string());
        println!("     {} (revenue: {})", name, revenue);
    }
}

fn main() {
    println!("=== RecordView Basic View Example ===\n");

    // 1. Declare columns
    println!("1. Declaring columns...");
    let columns = ColumnSet::new(vec![
        Column::text("Name", "Account Name").sortable(),
        Column::text("Industry", "Industry").sortable(),
        Column::number("AnnualRevenue", "Annual Revenue")
            .sortable()
            .editable(),
    ]);
    println!("   {} columns declared\n", columns.len());

    // 2. Load records
    println!("2. Loading records...");
    let mut store = RecordStore::new(columns, 3).expect("valid page size");
    store.set_all(vec![
        account("Acme Corp", "Manufacturing", Some(100.0)),
        account("Beta Industries", "Banking", Some(50.0)),
        account("acme2", "Technology", None),
        account("Delta Partners", "Technology", Some(75.0)),
        account("Gamma Acme", "Retail", Some(25.0)),
        account("Epsilon", "Banking", Some(60.0)),
        account("Zeta Group", "Retail", Some(10.0)),
    ]);
    println!("   {} records loaded\n", store.total_records());

    // 3. Page through
    println!("3. Paging...");
    print_page(&store);
    store.next_page();
    print_page(&store);
    println!();

    // 4. Search
    println!("4. Searching for 'acme'...");
    store.set_search("acme", "Name");
    print_page(&store);
    println!();

    // 5. Sort the filtered subset
    println!("5. Sorting by revenue, descending...");
    store.set_sort("AnnualRevenue", SortDirection::Descending);
    print_page(&store);
    println!();

    // 6. Back to the full set, sort intact
    println!("6. Clearing search...");
    store.set_search("", "Name");
    print_page(&store);
}
