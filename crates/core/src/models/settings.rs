use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Display currency. Formatting only — no conversion anywhere in the core,
/// amounts are currency-agnostic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Aed,
    Eur,
    Gbp,
    Try,
}

impl Currency {
    /// ISO-style code, e.g. "USD".
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aed => "AED",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Try => "TRY",
        }
    }

    /// Display symbol prefixed to formatted amounts.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Aed => "د.إ",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Try => "₺",
        }
    }

    /// Format an amount rounded to whole units, e.g. "$1,250".
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let whole = amount.abs().round() as u64;
        let grouped = group_thousands(whole);
        if negative {
            format!("-{}{grouped}", self.symbol())
        } else {
            format!("{}{grouped}", self.symbol())
        }
    }

    /// Format an amount with two decimal places, e.g. "$1,250.75".
    #[must_use]
    pub fn format_full(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let abs = amount.abs();
        let whole = abs.trunc() as u64;
        let cents = ((abs - abs.trunc()) * 100.0).round() as u64;
        // rounding can carry cents up to 100
        let (whole, cents) = if cents >= 100 { (whole + 1, 0) } else { (whole, cents) };
        let grouped = group_thousands(whole);
        if negative {
            format!("-{}{grouped}.{cents:02}", self.symbol())
        } else {
            format!("{}{grouped}.{cents:02}", self.symbol())
        }
    }
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(",")
}

/// User-configurable settings, stored alongside the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language used for identity and reflection messages
    pub language: Language,

    /// Currency used when formatting amounts for display
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: Currency::Usd,
        }
    }
}
