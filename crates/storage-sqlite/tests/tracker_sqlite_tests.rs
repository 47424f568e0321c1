//! End-to-end tests of the tracker facade over a real SQLite file.

use balancebook_core::accounts::{AccountType, AccountUpdate, NewAccount};
use balancebook_core::notes::NewPeriodNote;
use balancebook_core::snapshots::NewBalanceSnapshot;
use balancebook_core::{TrackerService, TrackerServiceTrait};
use balancebook_storage_sqlite::{create_pool, get_connection, SqliteStorage};
use chrono::NaiveDate;
use diesel::RunQueryDsl;
use tempfile::tempdir;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn open(dir: &tempfile::TempDir) -> (SqliteStorage, TrackerService) {
    let db_path = dir.path().join("nested").join("tracker.db");
    let storage = SqliteStorage::open(&db_path.to_string_lossy()).expect("Failed to open storage");
    let service = TrackerService::new(storage.repositories());
    (storage, service)
}

async fn create_account(service: &TrackerService, name: &str) -> String {
    service
        .save_account(NewAccount {
            name: name.to_string(),
            account_type: AccountType::Bank,
            description: Some("salary".to_string()),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_snapshot_upsert_keeps_single_row() {
    let temp_dir = tempdir().unwrap();
    let (_storage, service) = open(&temp_dir);
    let account_id = create_account(&service, "Checking").await;

    let first = service
        .save_balance_snapshot(NewBalanceSnapshot {
            account_id: account_id.clone(),
            record_date: d("2024-01-06"),
            balance: 100.0,
        })
        .await
        .unwrap();
    let second = service
        .save_balance_snapshot(NewBalanceSnapshot {
            account_id: account_id.clone(),
            record_date: d("2024-01-06"),
            balance: 150.0,
        })
        .await
        .unwrap();

    let stored = service.list_snapshots().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[0].created_at, first.created_at);
    assert_eq!(stored[0].balance, 150.0);
    assert_eq!(second.id, first.id);
}

#[tokio::test]
async fn test_delete_account_cascades() {
    let temp_dir = tempdir().unwrap();
    let (_storage, service) = open(&temp_dir);
    let doomed = create_account(&service, "Doomed").await;
    let kept = create_account(&service, "Kept").await;
    for (account_id, date) in [
        (&doomed, "2024-01-06"),
        (&doomed, "2024-01-13"),
        (&kept, "2024-01-13"),
    ] {
        service
            .save_balance_snapshot(NewBalanceSnapshot {
                account_id: account_id.clone(),
                record_date: d(date),
                balance: 1.0,
            })
            .await
            .unwrap();
    }

    assert!(service.delete_account(&doomed).await.unwrap());
    assert!(!service.delete_account(&doomed).await.unwrap());

    let remaining = service.list_snapshots().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].account_id, kept);
}

#[tokio::test]
async fn test_update_account_clears_description() {
    let temp_dir = tempdir().unwrap();
    let (_storage, service) = open(&temp_dir);
    let account_id = create_account(&service, "Checking").await;

    let updated = service
        .update_account(
            &account_id,
            AccountUpdate {
                account_type: Some(AccountType::Stock),
                description: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.account_type, AccountType::Stock);

    let stored = service.get_account(&account_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Checking");
    assert_eq!(stored.account_type, AccountType::Stock);
    assert!(stored.description.is_none());
}

#[tokio::test]
async fn test_summaries_and_trends() {
    let temp_dir = tempdir().unwrap();
    let (_storage, service) = open(&temp_dir);
    let bank = create_account(&service, "Bank").await;
    let wallet = create_account(&service, "Wallet").await;
    create_account(&service, "Unused").await;

    for (account_id, date, balance) in [
        (&bank, "2024-01-06", 100.0),
        (&bank, "2024-01-27", 300.0),
        (&wallet, "2024-01-27", 25.0),
    ] {
        service
            .save_balance_snapshot(NewBalanceSnapshot {
                account_id: account_id.clone(),
                record_date: d(date),
                balance,
            })
            .await
            .unwrap();
    }

    let summary = service
        .get_weekly_summary(d("2024-01-27"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.total_balance, 325.0);
    assert_eq!(summary.accounts.len(), 2);

    let recent = service.get_recent_periods(None).await.unwrap();
    let dates: Vec<NaiveDate> = recent.iter().map(|s| s.record_date).collect();
    assert_eq!(dates, vec![d("2024-01-27"), d("2024-01-06")]);

    let trend = service
        .get_account_trend(&bank, d("2024-01-27"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trend.weekly_change, 200.0);

    let trends = service
        .get_all_account_trends(Some(d("2024-01-27")))
        .await
        .unwrap();
    assert_eq!(trends.len(), 2);
}

#[tokio::test]
async fn test_notes_upsert_and_persist_across_reopen() {
    let temp_dir = tempdir().unwrap();
    {
        let (_storage, service) = open(&temp_dir);
        for income in ["salary", "salary and bonus"] {
            service
                .save_note(NewPeriodNote {
                    record_date: d("2024-01-06"),
                    income_note: Some(income.to_string()),
                    expense_note: None,
                })
                .await
                .unwrap();
        }
    }

    // Rows written with the persisted column names are read back by the facade.
    let db_path = temp_dir.path().join("nested").join("tracker.db");
    let pool = create_pool(&db_path.to_string_lossy()).unwrap();
    let mut conn = get_connection(&pool).unwrap();
    diesel::sql_query(
        "INSERT INTO weekly_notes (id, recordDate, incomeNote, expenseNote, createdAt, updatedAt) \
         VALUES ('legacy', '2023-12-30', NULL, 'rent', '2023-12-30 08:00:00', '2023-12-30 08:00:00')",
    )
    .execute(&mut conn)
    .unwrap();
    drop(conn);

    let (_storage, service) = open(&temp_dir);
    let notes = service.list_notes().await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].income_note.as_deref(), Some("salary and bonus"));
    assert_eq!(notes[1].id, "legacy");
    assert_eq!(notes[1].expense_note.as_deref(), Some("rent"));
}

#[tokio::test]
async fn test_seed_sample_data_once() {
    let temp_dir = tempdir().unwrap();
    let (_storage, service) = open(&temp_dir);

    assert_eq!(service.seed_sample_data(Some(d("2024-01-06"))).await.unwrap(), 4);
    assert_eq!(service.seed_sample_data(Some(d("2024-01-06"))).await.unwrap(), 0);
    let summary = service
        .get_weekly_summary(d("2024-01-06"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.accounts.len(), 4);
}
