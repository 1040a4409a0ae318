use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (salary, gifts, ...)
    Income,
    /// Money going out (rent, food, ...)
    Expense,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// Sort order for transaction listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSortOrder {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
}

/// Fixed catalog of income categories.
pub const INCOME_CATEGORIES: [&str; 5] = [
    "Salary",
    "Business / Freelance",
    "Investments",
    "Gifts",
    "Other Income",
];

/// Fixed catalog of expense categories.
pub const EXPENSE_CATEGORIES: [&str; 12] = [
    "Food & Dining",
    "Drinks & Coffee",
    "Transportation",
    "Rent / Housing",
    "Utilities",
    "Subscriptions",
    "Shopping",
    "Entertainment",
    "Health",
    "Travel",
    "Education",
    "Other Expenses",
];

/// Expense categories that are recurring by nature (contracts, bills).
/// Used by ring derivation to pick out the "fixed" spending bucket.
pub const FIXED_EXPENSE_CATEGORIES: [&str; 3] =
    ["Rent / Housing", "Utilities", "Subscriptions"];

/// A single income/expense record in the ledger.
///
/// Category strings come from the fixed catalogs above but are NOT
/// re-validated at storage time; unknown categories simply never match
/// the fixed bucket or the catalog-driven UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Amount (always positive; direction comes from `kind`)
    pub amount: f64,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category name from the income or expense catalog
    pub category: String,

    /// Free-text note, may be empty
    #[serde(default)]
    pub note: String,

    /// Effective date of the transaction (decides which month it lands in)
    pub date: NaiveDate,

    /// Timestamp of record creation, immutable once set
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            category: category.into(),
            note: note.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Whether this category belongs to the fixed (recurring-by-nature) set.
    #[must_use]
    pub fn is_fixed_category(category: &str) -> bool {
        FIXED_EXPENSE_CATEGORIES.contains(&category)
    }
}
