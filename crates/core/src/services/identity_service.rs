use std::collections::HashSet;

use crate::i18n::Language;
use crate::models::identity::{FinancialIdentity, IdentityName};
use crate::models::transaction::{Transaction, TransactionType};

/// How many trailing transactions (in list order) count as "recent"
/// for the category-diversity check.
const RECENT_WINDOW: usize = 10;

/// Above this many distinct recent expense categories, a high spend
/// ratio classifies as Voyager instead of Drifter.
const DIVERSITY_THRESHOLD: usize = 5;

/// Derives the single financial identity label from the full history.
///
/// Pure classification over the snapshot; the language argument only
/// selects message text, never the outcome.
pub struct IdentityService;

impl IdentityService {
    pub fn new() -> Self {
        Self
    }

    /// Classify the full transaction history. First matching rule wins.
    #[must_use]
    pub fn classify_identity(
        &self,
        transactions: &[Transaction],
        language: Language,
    ) -> FinancialIdentity {
        let name = self.classify(transactions);
        FinancialIdentity::new(name, language)
    }

    fn classify(&self, transactions: &[Transaction]) -> IdentityName {
        if transactions.is_empty() {
            return IdentityName::Explorer;
        }

        let total_income: f64 = transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Income)
            .map(|tr| tr.amount)
            .sum();
        let total_expense: f64 = transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Expense)
            .map(|tr| tr.amount)
            .sum();

        // With no income at all the ratio degrades to the raw expense total
        // rather than dividing by zero.
        let denominator = if total_income == 0.0 { 1.0 } else { total_income };
        let ratio = total_expense / denominator;

        if ratio < 0.30 {
            return IdentityName::Builder;
        }
        if ratio < 0.60 {
            return IdentityName::Stabilizer;
        }
        if ratio < 0.85 {
            return IdentityName::Observer;
        }

        // Recent window is list order (insertion order), not date order.
        let recent_start = transactions.len().saturating_sub(RECENT_WINDOW);
        let recent_categories: HashSet<&str> = transactions[recent_start..]
            .iter()
            .filter(|tr| tr.kind == TransactionType::Expense)
            .map(|tr| tr.category.as_str())
            .collect();

        if recent_categories.len() > DIVERSITY_THRESHOLD {
            IdentityName::Voyager
        } else {
            IdentityName::Drifter
        }
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}
