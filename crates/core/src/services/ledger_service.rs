use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionType};

/// Manages ledger mutations (add/update/remove) and whole-history totals.
///
/// Pure business logic — no I/O. Transactions stay in insertion order;
/// the identity classifier's recent window depends on that.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new transaction to the ledger.
    /// Rejects non-finite or non-positive amounts.
    pub fn add_transaction(
        &self,
        ledger: &mut Ledger,
        transaction: Transaction,
    ) -> Result<(), CoreError> {
        Self::validate_amount(transaction.amount)?;
        ledger.transactions.push(transaction);
        Ok(())
    }

    /// Update the mutable fields of an existing transaction in place.
    /// `id`, `created_at`, and list position are preserved.
    #[allow(clippy::too_many_arguments)]
    pub fn update_transaction(
        &self,
        ledger: &mut Ledger,
        id: Uuid,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        Self::validate_amount(amount)?;
        let transaction = ledger
            .transactions
            .iter_mut()
            .find(|tr| tr.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;

        transaction.amount = amount;
        transaction.kind = kind;
        transaction.category = category.into();
        transaction.note = note.into();
        transaction.date = date;
        Ok(())
    }

    /// Remove a transaction by id, returning it.
    pub fn remove_transaction(
        &self,
        ledger: &mut Ledger,
        id: Uuid,
    ) -> Result<Transaction, CoreError> {
        let idx = ledger
            .transactions
            .iter()
            .position(|tr| tr.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;
        Ok(ledger.transactions.remove(idx))
    }

    /// Sum of all income amounts over the full history.
    #[must_use]
    pub fn total_income(&self, transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Income)
            .map(|tr| tr.amount)
            .sum()
    }

    /// Sum of all expense amounts over the full history.
    #[must_use]
    pub fn total_expense(&self, transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Expense)
            .map(|tr| tr.amount)
            .sum()
    }

    /// Amounts must be finite and strictly positive before they reach
    /// the aggregation core.
    fn validate_amount(amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() {
            return Err(CoreError::ValidationError(
                "Transaction amount must be a finite number".into(),
            ));
        }
        if amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Transaction amount must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
