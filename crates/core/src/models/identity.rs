use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// The closed set of financial identity labels.
///
/// Stable across languages — localization only affects the display title
/// and message, never which variant the classifier picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityName {
    /// No history yet
    Explorer,
    /// Spending well below income
    Builder,
    /// Moderate, controlled spending
    Stabilizer,
    /// Spending approaching income
    Observer,
    /// High spend ratio across many categories
    Voyager,
    /// High spend ratio, concentrated
    Drifter,
}

impl std::fmt::Display for IdentityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityName::Explorer => write!(f, "Explorer"),
            IdentityName::Builder => write!(f, "Builder"),
            IdentityName::Stabilizer => write!(f, "Stabilizer"),
            IdentityName::Observer => write!(f, "Observer"),
            IdentityName::Voyager => write!(f, "Voyager"),
            IdentityName::Drifter => write!(f, "Drifter"),
        }
    }
}

/// Behavioral label derived from the full transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialIdentity {
    /// Which identity the history classifies as
    pub name: IdentityName,

    /// Localized display title, e.g. "The Builder"
    pub title: String,

    /// Localized narrative message matching `name`
    pub message: String,
}

impl FinancialIdentity {
    pub(crate) fn new(name: IdentityName, language: Language) -> Self {
        Self {
            name,
            title: crate::i18n::identity_title(language, name).to_string(),
            message: crate::i18n::identity_message(language, name).to_string(),
        }
    }
}
