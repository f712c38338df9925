/// Edit Commit Example
///
/// This example demonstrates the asynchronous edit-commit cycle:
/// - Loading records through a RecordSource
/// - Committing a batch of edits through a RecordUpdater, one of which fails
/// - Observing the partial-failure report and the notification

use async_trait::async_trait;
use recordview::{
    Column, ColumnSet, FetchError, FieldValue, NotificationKind, NotificationSink, Record,
    RecordEdit, RecordSource, RecordStore, RecordUpdater, TableSession, UpdateError,
};

struct DemoSource;

#[async_trait]
impl RecordSource for DemoSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        let rows = serde_json::json!([
            {"Name": "Acme Corp", "AnnualRevenue": 100},
            {"Name": "Beta Industries", "AnnualRevenue": 50},
            {"Name": "Delta Partners", "AnnualRevenue": 75},
        ]);
        let rows = rows.as_array().expect("demo data is an array");
        Ok(rows
            .iter()
            .map(|row| recordview::record_from_json(row.as_object().expect("demo row")))
            .collect())
    }
}

/// Rejects updates for the record at position 1
struct FlakyUpdater;

#[async_trait]
impl RecordUpdater for FlakyUpdater {
    async fn update(&self, edit: &RecordEdit) -> Result<(), UpdateError> {
        if edit.position == 1 {
            Err(UpdateError::new("row locked by another user"))
        } else {
            Ok(())
        }
    }
}

struct ConsoleToast;

impl NotificationSink for ConsoleToast {
    fn notify(&self, kind: NotificationKind, message: &str) {
        println!("   [{:?}] {}", kind, message);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== RecordView Edit Commit Example ===\n");

    let columns = ColumnSet::new(vec![
        Column::text("Name", "Account Name").sortable(),
        Column::number("AnnualRevenue", "Annual Revenue")
            .sortable()
            .editable(),
    ]);
    let store = RecordStore::new(columns, 10).expect("valid page size");
    let mut session = TableSession::new(store, DemoSource, FlakyUpdater, ConsoleToast);

    println!("1. Loading...");
    let count = session.load().await.expect("demo source never fails");
    println!("   {} records loaded\n", count);

    println!("2. Committing a batch of three edits (one will fail)...");
    let report = session
        .commit_edits(vec![
            RecordEdit::new(0).set("AnnualRevenue", FieldValue::Number(150.0)),
            RecordEdit::new(1).set("AnnualRevenue", FieldValue::Number(55.0)),
            RecordEdit::new(2).set("AnnualRevenue", FieldValue::Number(80.0)),
        ])
        .await;
    println!();

    println!("3. Report: {} merged, {} failed", report.merged, report.failures.len());
    for failure in &report.failures {
        println!("   failed: {}", failure);
    }
    println!();

    println!("4. Final values:");
    for record in session.store().records() {
        let name = record
            .get("Name")
            .and_then(|v| v.to_display_string())
            .unwrap_or_default();
        let revenue = record
            .get("AnnualRevenue")
            .and_then(|v| v.to_display_string())
            .unwrap_or_else(|| "-".to_string());
        println!("   {}: {}", name, revenue);
    }
}
