use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Canonical `"YYYY-MM"` key for the month a date falls in.
/// Zero-padded, so lexical order equals chronological order.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    month_key_of(date.year(), date.month())
}

/// Canonical key for explicit year/month components.
#[must_use]
pub fn month_key_of(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Shift a (year, month) pair by a signed number of months.
#[must_use]
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    // 0-based month index makes the euclidean arithmetic clean
    let index = year * 12 + month as i32 - 1 + offset;
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}

/// Human label for a month key, e.g. "Jun 2024".
/// Falls back to the raw key if it doesn't parse.
#[must_use]
pub fn month_label(key: &str) -> String {
    let Some((year, month)) = parse_month_key(key) else {
        return key.to_string();
    };
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d.format("%b %Y").to_string(),
        None => key.to_string(),
    }
}

/// Split a `"YYYY-MM"` key into integer components.
#[must_use]
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (y, m) = key.split_once('-')?;
    let year = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

/// Per-month aggregate derived from the transaction list.
///
/// A pure projection: recomputed from scratch on every aggregation pass,
/// never persisted, never cached across ledger mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthData {
    /// Canonical `"YYYY-MM"` key
    pub key: String,

    /// Display label, e.g. "Jun 2024"
    pub label: String,

    /// Month component (1-12)
    pub month: u32,

    /// Year component
    pub year: i32,

    /// Sum of income amounts in this month
    pub income: f64,

    /// Sum of expense amounts in this month
    pub expense: f64,

    /// income - expense
    pub balance: f64,

    /// How balanced the month's flow was, in [0, 1].
    /// 1 for a month with no activity.
    pub stability: f64,

    /// The month's subset of transactions, in ledger order
    pub transactions: Vec<Transaction>,
}

impl MonthData {
    /// True if nothing happened this month.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
