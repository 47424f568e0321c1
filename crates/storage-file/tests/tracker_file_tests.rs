//! The tracker facade over the JSON file and in-memory backends.

use balancebook_core::accounts::{AccountType, NewAccount};
use balancebook_core::errors::{DatabaseError, Error};
use balancebook_core::notes::NewPeriodNote;
use balancebook_core::snapshots::{BalanceSnapshot, NewBalanceSnapshot, SnapshotRepositoryTrait};
use balancebook_core::{TrackerService, TrackerServiceTrait};
use balancebook_storage_file::FileStorage;
use chrono::{NaiveDate, Utc};
use tempfile::tempdir;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn create_account(service: &TrackerService, name: &str) -> String {
    service
        .save_account(NewAccount {
            name: name.to_string(),
            account_type: AccountType::Pay,
            description: None,
        })
        .await
        .unwrap()
        .id
}

async fn save(service: &TrackerService, account_id: &str, date: &str, balance: f64) {
    service
        .save_balance_snapshot(NewBalanceSnapshot {
            account_id: account_id.to_string(),
            record_date: d(date),
            balance,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("balancebook.json");

    let account_id = {
        let service = TrackerService::new(FileStorage::open(&path).repositories());
        let account_id = create_account(&service, "Alipay").await;
        save(&service, &account_id, "2024-01-06", 100.0).await;
        save(&service, &account_id, "2024-01-06", 120.0).await;
        service
            .save_note(NewPeriodNote {
                record_date: d("2024-01-06"),
                income_note: None,
                expense_note: Some("groceries".to_string()),
            })
            .await
            .unwrap();
        account_id
    };

    let service = TrackerService::new(FileStorage::open(&path).repositories());
    let accounts = service.list_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, account_id);

    let history = service
        .get_account_balance_history(&account_id, None)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].balance, 120.0);

    let note = service.get_note(d("2024-01-06")).await.unwrap().unwrap();
    assert_eq!(note.expense_note.as_deref(), Some("groceries"));
}

#[tokio::test]
async fn test_file_layout_uses_table_and_column_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("balancebook.json");
    let service = TrackerService::new(FileStorage::open(&path).repositories());
    let account_id = create_account(&service, "Cash").await;
    save(&service, &account_id, "2024-01-13", 5.5).await;

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["accounts"][0]["type"], "pay");
    assert_eq!(json["weekly_records"][0]["accountId"], account_id.as_str());
    assert_eq!(json["weekly_records"][0]["recordDate"], "2024-01-13");
    assert_eq!(json["weekly_records"][0]["balance"], 5.5);
    assert!(json["weekly_notes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_snapshot_for_unknown_account_is_rejected() {
    let storage = FileStorage::in_memory();
    let repositories = storage.repositories();
    let now = Utc::now().naive_utc();

    let result = repositories
        .snapshots
        .put(BalanceSnapshot {
            id: "s1".to_string(),
            account_id: "ghost".to_string(),
            record_date: d("2024-01-06"),
            balance: 1.0,
            created_at: now,
            updated_at: now,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
    ));
}

#[tokio::test]
async fn test_in_memory_cascade_and_trends() {
    let service = TrackerService::new(FileStorage::in_memory().repositories());
    let bank = create_account(&service, "Bank").await;
    let wallet = create_account(&service, "Wallet").await;

    save(&service, &bank, "2023-10-14", 50.0).await;
    save(&service, &bank, "2024-01-06", 100.0).await;
    save(&service, &bank, "2024-01-27", 300.0).await;
    save(&service, &wallet, "2024-01-27", 10.0).await;

    let trend = service
        .get_account_trend(&bank, d("2024-01-27"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trend.weekly_change, 200.0);
    assert_eq!(trend.monthly_change, 250.0);
    assert_eq!(trend.quarterly_change, 250.0);

    assert!(service.delete_account(&bank).await.unwrap());
    let snapshots = service.list_snapshots().await.unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].account_id, wallet);

    let trends = service
        .get_all_account_trends(Some(d("2024-01-27")))
        .await
        .unwrap();
    assert_eq!(trends.len(), 1);
}
