use serde::{Deserialize, Serialize};

use super::settings::Settings;
use super::transaction::Transaction;

/// The main data container owned by the tracker facade.
///
/// The transaction list is the single canonical state; everything else
/// (months, identity, themes, rings) is derived from it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// All transactions, in insertion order
    pub transactions: Vec<Transaction>,

    /// User settings (language, display currency)
    pub settings: Settings,

    /// Transactions that have been removed but can be restored (undo support)
    #[serde(default)]
    pub trash: Vec<Transaction>,
}
