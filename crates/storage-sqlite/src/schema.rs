// Column names follow the persisted camelCase layout; Rust-side names are snake_case.

diesel::table! {
    accounts (id) {
        id -> Text,
        name -> Text,
        #[sql_name = "type"]
        account_type -> Text,
        description -> Nullable<Text>,
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
    }
}

diesel::table! {
    weekly_records (id) {
        id -> Text,
        #[sql_name = "accountId"]
        account_id -> Text,
        #[sql_name = "recordDate"]
        record_date -> Date,
        balance -> Double,
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
        #[sql_name = "updatedAt"]
        updated_at -> Timestamp,
    }
}

diesel::table! {
    weekly_notes (id) {
        id -> Text,
        #[sql_name = "recordDate"]
        record_date -> Date,
        #[sql_name = "incomeNote"]
        income_note -> Nullable<Text>,
        #[sql_name = "expenseNote"]
        expense_note -> Nullable<Text>,
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
        #[sql_name = "updatedAt"]
        updated_at -> Timestamp,
    }
}

diesel::joinable!(weekly_records -> accounts (account_id));

diesel::allow_tables_to_appear_in_same_query!(accounts, weekly_notes, weekly_records,);
