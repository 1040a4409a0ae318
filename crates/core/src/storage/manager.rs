use crate::errors::CoreError;
use crate::models::transaction::Transaction;

/// High-level storage operations: the transaction list as a JSON snapshot.
///
/// The snapshot is a plain JSON array of Transaction records, replaced
/// wholesale on every save — no partial updates, no schema versioning.
/// Loading is deliberately forgiving: missing or malformed data comes back
/// as an empty list so a broken snapshot never takes the app down.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a transaction list to its JSON snapshot form.
    pub fn save_to_string(transactions: &[Transaction]) -> Result<String, CoreError> {
        serde_json::to_string(transactions)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions: {e}")))
    }

    /// Parse a JSON snapshot back into a transaction list.
    /// Malformed input is treated as an empty list (silent recovery).
    #[must_use]
    pub fn load_from_string(data: &str) -> Vec<Transaction> {
        serde_json::from_str(data).unwrap_or_default()
    }

    /// Write the snapshot to a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(transactions: &[Transaction], path: &str) -> Result<(), CoreError> {
        let json = Self::save_to_string(transactions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot from a file on disk (native only).
    /// A missing, unreadable, or malformed file loads as an empty list.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn load_from_file(path: &str) -> Vec<Transaction> {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::load_from_string(&data),
            Err(_) => Vec::new(),
        }
    }
}
