// ═══════════════════════════════════════════════════════════════════
// Month Aggregator — rolling window, bucketing, stability
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use orbit_core::models::transaction::{Transaction, TransactionType};
use orbit_core::services::month_service::MonthService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn income(amount: f64, date: NaiveDate) -> Transaction {
    Transaction::new(amount, TransactionType::Income, "Salary", "", date)
}

fn expense(amount: f64, category: &str, date: NaiveDate) -> Transaction {
    Transaction::new(amount, TransactionType::Expense, category, "", date)
}

#[test]
fn empty_history_yields_six_month_window() {
    let service = MonthService::new();
    let months = service.aggregate_months(&[], d(2024, 6, 15));

    let keys: Vec<&str> = months.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["2024-03", "2024-04", "2024-05", "2024-06", "2024-07", "2024-08"]
    );

    for month in &months {
        assert_eq!(month.income, 0.0);
        assert_eq!(month.expense, 0.0);
        assert_eq!(month.balance, 0.0);
        assert_eq!(month.stability, 1.0);
        assert!(month.transactions.is_empty());
    }
}

#[test]
fn window_crosses_year_boundaries() {
    let service = MonthService::new();
    let months = service.aggregate_months(&[], d(2024, 1, 10));
    let keys: Vec<&str> = months.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
    );

    let months = service.aggregate_months(&[], d(2024, 12, 1));
    let keys: Vec<&str> = months.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["2024-09", "2024-10", "2024-11", "2024-12", "2025-01", "2025-02"]
    );
}

#[test]
fn historical_transaction_extends_window() {
    let service = MonthService::new();
    let transactions = vec![income(50.0, d(2020, 1, 10))];
    let months = service.aggregate_months(&transactions, d(2024, 6, 15));

    assert_eq!(months.len(), 7);
    assert_eq!(months[0].key, "2020-01");
    assert_eq!(months[0].income, 50.0);
    assert_eq!(months[0].expense, 0.0);
    assert_eq!(months[0].balance, 50.0);
    assert_eq!(months[0].transactions.len(), 1);

    let keys: Vec<&str> = months[1..].iter().map(|m| m.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["2024-03", "2024-04", "2024-05", "2024-06", "2024-07", "2024-08"]
    );
}

#[test]
fn no_duplicate_key_when_transaction_falls_in_window() {
    let service = MonthService::new();
    let transactions = vec![income(100.0, d(2024, 6, 1)), income(20.0, d(2024, 6, 30))];
    let months = service.aggregate_months(&transactions, d(2024, 6, 15));

    assert_eq!(months.len(), 6);
    let june = months.iter().find(|m| m.key == "2024-06").unwrap();
    assert_eq!(june.income, 120.0);
    assert_eq!(june.transactions.len(), 2);
}

#[test]
fn transactions_bucket_by_calendar_month() {
    let service = MonthService::new();
    let transactions = vec![
        income(1000.0, d(2024, 5, 31)),
        expense(300.0, "Rent / Housing", d(2024, 6, 1)),
        expense(50.0, "Food & Dining", d(2024, 6, 20)),
        income(200.0, d(2024, 7, 1)),
    ];
    let months = service.aggregate_months(&transactions, d(2024, 6, 15));

    let may = months.iter().find(|m| m.key == "2024-05").unwrap();
    assert_eq!((may.income, may.expense), (1000.0, 0.0));

    let june = months.iter().find(|m| m.key == "2024-06").unwrap();
    assert_eq!((june.income, june.expense), (0.0, 350.0));
    assert_eq!(june.balance, -350.0);

    let july = months.iter().find(|m| m.key == "2024-07").unwrap();
    assert_eq!((july.income, july.expense), (200.0, 0.0));
}

#[test]
fn aggregation_is_deterministic() {
    let service = MonthService::new();
    let transactions = vec![
        income(1000.0, d(2024, 5, 31)),
        expense(300.0, "Rent / Housing", d(2024, 6, 1)),
        income(75.5, d(2023, 2, 14)),
    ];
    let first = service.aggregate_months(&transactions, d(2024, 6, 15));
    let second = service.aggregate_months(&transactions, d(2024, 6, 15));
    assert_eq!(first, second);
}

#[test]
fn balance_identity_holds_for_every_month() {
    let service = MonthService::new();
    let transactions = vec![
        income(1234.56, d(2024, 4, 2)),
        expense(78.9, "Shopping", d(2024, 4, 3)),
        expense(500.0, "Travel", d(2024, 5, 20)),
        income(10.0, d(2022, 11, 1)),
    ];
    for month in service.aggregate_months(&transactions, d(2024, 6, 15)) {
        assert_eq!(month.balance, month.income - month.expense);
    }
}

#[test]
fn stability_stays_in_unit_interval() {
    let service = MonthService::new();
    let transactions = vec![
        income(100.0, d(2024, 4, 1)),
        expense(900.0, "Shopping", d(2024, 4, 2)),
        income(500.0, d(2024, 5, 1)),
        expense(100.0, "Food & Dining", d(2024, 5, 2)),
        expense(30.0, "Health", d(2024, 6, 1)),
    ];
    for month in service.aggregate_months(&transactions, d(2024, 6, 15)) {
        assert!(
            (0.0..=1.0).contains(&month.stability),
            "stability {} out of range for {}",
            month.stability,
            month.key
        );
    }
}

#[test]
fn stability_balanced_month() {
    let service = MonthService::new();
    // income 500, expense 100: balance/total = 400/600
    let transactions = vec![
        income(500.0, d(2024, 6, 1)),
        expense(100.0, "Food & Dining", d(2024, 6, 2)),
    ];
    let months = service.aggregate_months(&transactions, d(2024, 6, 15));
    let june = months.iter().find(|m| m.key == "2024-06").unwrap();
    assert!((june.stability - 400.0 / 600.0).abs() < 1e-12);
}

#[test]
fn stability_clamps_negative_ratio_to_zero() {
    // A heavily negative month: balance/total is -1, the clamp floors it at
    // 0 before the absolute value, so stability reports 0, not 1. Pins the
    // shipped behavior.
    let service = MonthService::new();
    let transactions = vec![expense(800.0, "Travel", d(2024, 6, 3))];
    let months = service.aggregate_months(&transactions, d(2024, 6, 15));
    let june = months.iter().find(|m| m.key == "2024-06").unwrap();
    assert_eq!(june.stability, 0.0);
}

#[test]
fn month_metadata_is_populated() {
    let service = MonthService::new();
    let months = service.aggregate_months(&[], d(2024, 6, 15));
    let june = months.iter().find(|m| m.key == "2024-06").unwrap();
    assert_eq!(june.year, 2024);
    assert_eq!(june.month, 6);
    assert_eq!(june.label, "Jun 2024");
}

#[test]
fn month_subset_preserves_ledger_order() {
    let service = MonthService::new();
    let a = expense(10.0, "Shopping", d(2024, 6, 20));
    let b = expense(20.0, "Health", d(2024, 6, 1));
    let transactions = vec![a.clone(), b.clone()];
    let months = service.aggregate_months(&transactions, d(2024, 6, 15));
    let june = months.iter().find(|m| m.key == "2024-06").unwrap();
    // list order, not date order
    assert_eq!(june.transactions, vec![a, b]);
}
