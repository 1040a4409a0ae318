use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::models::month::{
    month_key, month_key_of, month_label, parse_month_key, shift_month, MonthData,
};
use crate::models::transaction::{Transaction, TransactionType};

/// How many months before the reference month the rolling window starts.
const WINDOW_BACK: i32 = -3;

/// How many months after the reference month the rolling window ends.
const WINDOW_FORWARD: i32 = 2;

/// Buckets transactions into calendar months and produces the ordered
/// month timeline the frontend renders as planets.
///
/// Pure computation — no I/O, no caching. The whole timeline is rebuilt
/// from the transaction snapshot on every call.
pub struct MonthService;

impl MonthService {
    pub fn new() -> Self {
        Self
    }

    /// Build the ordered month timeline for a transaction snapshot.
    ///
    /// Always contains the 6-month rolling window around `reference_date`
    /// (offsets -3..=2), plus one entry for every other month that has
    /// transactions. Ascending by key, no duplicates.
    #[must_use]
    pub fn aggregate_months(
        &self,
        transactions: &[Transaction],
        reference_date: NaiveDate,
    ) -> Vec<MonthData> {
        // BTreeSet keeps keys unique and sorted; the zero-padded key format
        // makes lexical order chronological.
        let mut keys: BTreeSet<String> = BTreeSet::new();
        keys.insert(month_key(reference_date));

        for offset in WINDOW_BACK..=WINDOW_FORWARD {
            let (year, month) =
                shift_month(reference_date.year(), reference_date.month(), offset);
            keys.insert(month_key_of(year, month));
        }

        for tr in transactions {
            keys.insert(month_key(tr.date));
        }

        keys.into_iter()
            .map(|key| self.build_month(&key, transactions))
            .collect()
    }

    /// Aggregate a single month from the snapshot.
    fn build_month(&self, key: &str, transactions: &[Transaction]) -> MonthData {
        // Keys produced above always parse; this is only defensive against
        // a caller-supplied malformed key.
        let (year, month) = parse_month_key(key).unwrap_or((0, 1));

        let month_transactions: Vec<Transaction> = transactions
            .iter()
            .filter(|tr| month_key(tr.date) == key)
            .cloned()
            .collect();

        let income: f64 = month_transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Income)
            .map(|tr| tr.amount)
            .sum();
        let expense: f64 = month_transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Expense)
            .map(|tr| tr.amount)
            .sum();
        let balance = income - expense;

        MonthData {
            key: key.to_string(),
            label: month_label(key),
            month,
            year,
            income,
            expense,
            balance,
            stability: stability(income, expense),
            transactions: month_transactions,
        }
    }
}

/// Stability score for a month, in [0, 1].
///
/// A month with no flow is maximally stable by convention. Otherwise the
/// balance/total ratio is clamped to [0, 1] and then made non-negative,
/// in that order: a heavily negative month reports 0, not a magnitude.
/// Downstream theme thresholds assume this exact curve.
fn stability(income: f64, expense: f64) -> f64 {
    let total = income + expense;
    if total == 0.0 {
        return 1.0;
    }
    ((income - expense) / total).clamp(0.0, 1.0).abs()
}

impl Default for MonthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stability_no_flow_is_one() {
        assert_eq!(stability(0.0, 0.0), 1.0);
    }

    #[test]
    fn stability_clamps_before_abs() {
        // balance/total = -1 for a pure-expense month; the clamp floors it
        // at 0 before abs can turn it into 1.
        assert_eq!(stability(0.0, 500.0), 0.0);
    }

    #[test]
    fn stability_pure_income_is_one() {
        assert_eq!(stability(500.0, 0.0), 1.0);
    }
}
