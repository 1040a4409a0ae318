pub mod errors;
pub mod i18n;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use uuid::Uuid;

use i18n::Language;
use models::{
    identity::FinancialIdentity,
    ledger::Ledger,
    month::{month_key, MonthData},
    settings::{Currency, Settings},
    transaction::{Transaction, TransactionSortOrder, TransactionType},
    visual::{OrbitRing, PlanetTheme, Reflection},
};
use services::{
    identity_service::IdentityService, ledger_service::LedgerService,
    month_service::MonthService, visual_service::VisualService,
};
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the Orbit core library.
/// Holds the ledger state and all services needed to operate on it.
#[must_use]
pub struct OrbitTracker {
    ledger: Ledger,
    ledger_service: LedgerService,
    month_service: MonthService,
    identity_service: IdentityService,
    visual_service: VisualService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for OrbitTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrbitTracker")
            .field("transactions", &self.ledger.transactions.len())
            .field("settings", &self.ledger.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl OrbitTracker {
    /// Create a brand new empty ledger with default settings.
    pub fn create_new() -> Self {
        Self::build(Ledger::default())
    }

    /// Load the transaction list from a JSON snapshot string.
    /// Malformed data loads as an empty ledger (silent recovery).
    /// Use this for WASM / Tauri where the frontend handles storage I/O.
    pub fn load_from_string(data: &str) -> Self {
        let ledger = Ledger {
            transactions: StorageManager::load_from_string(data),
            ..Ledger::default()
        };
        Self::build(ledger)
    }

    /// Serialize the transaction list to its JSON snapshot form.
    /// Returns the string the frontend should write to storage.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_string(&mut self) -> Result<String, CoreError> {
        let json = StorageManager::save_to_string(&self.ledger.transactions)?;
        self.dirty = false;
        Ok(json)
    }

    /// Load the transaction list from a snapshot file on disk (native only).
    /// A missing or malformed file loads as an empty ledger.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Self {
        let ledger = Ledger {
            transactions: StorageManager::load_from_file(path),
            ..Ledger::default()
        };
        Self::build(ledger)
    }

    /// Save the transaction list to a snapshot file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.ledger.transactions, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Transaction Management ──────────────────────────────────────

    /// Log a new transaction. Returns its generated id.
    pub fn add_transaction(
        &mut self,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        let transaction = Transaction::new(amount, kind, category, note, date);
        let id = transaction.id;
        self.ledger_service
            .add_transaction(&mut self.ledger, transaction)?;
        self.dirty = true;
        Ok(id)
    }

    /// Update an existing transaction by its id.
    /// The id and creation timestamp are preserved.
    pub fn update_transaction(
        &mut self,
        id: Uuid,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        self.ledger_service
            .update_transaction(&mut self.ledger, id, amount, kind, category, note, date)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a transaction by its id.
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.ledger_service
            .remove_transaction(&mut self.ledger, id)?;
        self.dirty = true;
        Ok(())
    }

    /// Get a single transaction by its id.
    #[must_use]
    pub fn get_transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.ledger.transactions.iter().find(|tr| tr.id == id)
    }

    /// All transactions in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    /// Total number of transactions.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.ledger.transactions.len()
    }

    // ── Undo (Trash) ────────────────────────────────────────────────

    /// Remove a transaction and keep it in the trash for potential undo.
    /// Returns the removed transaction.
    pub fn remove_to_trash(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let removed = self
            .ledger_service
            .remove_transaction(&mut self.ledger, id)?;
        self.ledger.trash.push(removed.clone());
        self.dirty = true;
        Ok(removed)
    }

    /// Restore the most recently trashed transaction back into the ledger.
    /// Returns the restored transaction, or `None` if trash is empty.
    pub fn undo_last_removal(&mut self) -> Result<Option<Transaction>, CoreError> {
        let transaction = match self.ledger.trash.pop() {
            Some(tr) => tr,
            None => return Ok(None),
        };

        self.ledger_service
            .add_transaction(&mut self.ledger, transaction.clone())?;
        self.dirty = true;
        Ok(Some(transaction))
    }

    /// Transactions currently in the trash.
    #[must_use]
    pub fn get_trash(&self) -> &[Transaction] {
        &self.ledger.trash
    }

    /// Clear all trashed transactions permanently.
    pub fn clear_trash(&mut self) {
        if !self.ledger.trash.is_empty() {
            self.ledger.trash.clear();
            self.dirty = true;
        }
    }

    // ── Months & Derived State ──────────────────────────────────────

    /// The ordered month timeline for a given reference date.
    /// Always includes the 6-month rolling window around the reference
    /// month, plus every month that has transactions.
    #[must_use]
    pub fn months(&self, reference_date: NaiveDate) -> Vec<MonthData> {
        self.month_service
            .aggregate_months(&self.ledger.transactions, reference_date)
    }

    /// The month timeline as of today.
    #[must_use]
    pub fn months_now(&self) -> Vec<MonthData> {
        self.months(chrono::Utc::now().date_naive())
    }

    /// A single aggregated month by key, if present in the timeline.
    #[must_use]
    pub fn month(&self, key: &str, reference_date: NaiveDate) -> Option<MonthData> {
        self.months(reference_date).into_iter().find(|m| m.key == key)
    }

    /// Canonical key of the month a date falls in.
    #[must_use]
    pub fn month_key_for(&self, date: NaiveDate) -> String {
        month_key(date)
    }

    /// The financial identity derived from the full history,
    /// localized to the configured language.
    #[must_use]
    pub fn identity(&self) -> FinancialIdentity {
        self.identity_service
            .classify_identity(&self.ledger.transactions, self.ledger.settings.language)
    }

    /// Planet theme for an aggregated month.
    #[must_use]
    pub fn theme(&self, month: &MonthData) -> PlanetTheme {
        self.visual_service.derive_theme(month)
    }

    /// Orbit rings for an aggregated month (0-3, innermost first).
    #[must_use]
    pub fn rings(&self, month: &MonthData) -> Vec<OrbitRing> {
        self.visual_service.derive_rings(month)
    }

    /// Narrative reflection for an aggregated month.
    #[must_use]
    pub fn reflection(&self, month: &MonthData) -> Reflection {
        self.visual_service.derive_reflection(month)
    }

    /// Localized reflection text for an aggregated month.
    #[must_use]
    pub fn reflection_message(&self, month: &MonthData) -> &'static str {
        i18n::reflection_text(
            self.ledger.settings.language,
            self.visual_service.derive_reflection(month),
        )
    }

    // ── Totals ──────────────────────────────────────────────────────

    /// Sum of all income over the full history.
    #[must_use]
    pub fn total_income(&self) -> f64 {
        self.ledger_service.total_income(&self.ledger.transactions)
    }

    /// Sum of all expenses over the full history.
    #[must_use]
    pub fn total_expense(&self) -> f64 {
        self.ledger_service.total_expense(&self.ledger.transactions)
    }

    /// Net balance over the full history.
    #[must_use]
    pub fn total_balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    // ── Search & Sorting ────────────────────────────────────────────

    /// Search transactions by matching query against category and note
    /// (case-insensitive).
    #[must_use]
    pub fn search_transactions(&self, query: &str) -> Vec<&Transaction> {
        let q = query.to_lowercase();
        self.ledger
            .transactions
            .iter()
            .filter(|tr| {
                tr.category.to_lowercase().contains(&q) || tr.note.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Get transactions sorted by a specific order.
    #[must_use]
    pub fn transactions_sorted(&self, order: &TransactionSortOrder) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.ledger.transactions.iter().collect();
        match order {
            TransactionSortOrder::DateDesc => {
                transactions.sort_by(|a, b| b.date.cmp(&a.date));
            }
            TransactionSortOrder::DateAsc => {
                transactions.sort_by(|a, b| a.date.cmp(&b.date));
            }
            TransactionSortOrder::AmountDesc => transactions.sort_by(|a, b| {
                b.amount
                    .partial_cmp(&a.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::AmountAsc => transactions.sort_by(|a, b| {
                a.amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        transactions
    }

    /// Get transactions filtered by kind (income or expense).
    #[must_use]
    pub fn transactions_by_kind(&self, kind: TransactionType) -> Vec<&Transaction> {
        self.ledger
            .transactions
            .iter()
            .filter(|tr| tr.kind == kind)
            .collect()
    }

    /// Get transactions within a date range (inclusive).
    #[must_use]
    pub fn transactions_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Transaction> {
        self.ledger
            .transactions
            .iter()
            .filter(|tr| tr.date >= from && tr.date <= to)
            .collect()
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the language used for identity and reflection messages.
    pub fn set_language(&mut self, language: Language) {
        self.ledger.settings.language = language;
    }

    /// Set the display currency. Formatting only — stored amounts are
    /// currency-agnostic and are never converted.
    pub fn set_currency(&mut self, currency: Currency) {
        self.ledger.settings.currency = currency;
    }

    /// Get current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.ledger.settings
    }

    /// Format an amount in the configured display currency,
    /// rounded to whole units.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        self.ledger.settings.currency.format(amount)
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all transactions as a pretty-printed JSON string.
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.transactions).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}"))
        })
    }

    /// Import transactions from a JSON string, appending to the ledger.
    /// Every record is validated; on any failure nothing is imported.
    /// Returns the number of transactions imported.
    pub fn import_transactions_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let transactions: Vec<Transaction> = serde_json::from_str(json)?;
        let count = transactions.len();

        // Validate against a scratch copy first (all-or-nothing)
        let mut scratch = self.ledger.clone();
        for transaction in transactions {
            self.ledger_service
                .add_transaction(&mut scratch, transaction)?;
        }

        self.ledger = scratch;
        self.dirty = true;
        Ok(count)
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the ledger has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            ledger_service: LedgerService::new(),
            month_service: MonthService::new(),
            identity_service: IdentityService::new(),
            visual_service: VisualService::new(),
            dirty: false,
        }
    }
}
