use std::collections::HashMap;

use crate::models::month::MonthData;
use crate::models::transaction::{Transaction, TransactionType};
use crate::models::visual::{OrbitRing, PlanetTheme, Reflection, RingKind};

// ── Planet palette (closed set, six variants) ───────────────────────

const THEME_QUIET: PlanetTheme = PlanetTheme {
    color: "rgba(120, 130, 160, 0.4)",
    glow: "rgba(120, 130, 160, 0.1)",
    shadow_color: "rgba(120, 130, 160, 0.3)",
};

const THEME_OVERDRAWN: PlanetTheme = PlanetTheme {
    color: "#C4726F",
    glow: "rgba(196, 114, 111, 0.2)",
    shadow_color: "#C4726F",
};

const THEME_STRAINED: PlanetTheme = PlanetTheme {
    color: "#D4956A",
    glow: "rgba(212, 149, 106, 0.2)",
    shadow_color: "#D4956A",
};

const THEME_WATCHFUL: PlanetTheme = PlanetTheme {
    color: "#C9B458",
    glow: "rgba(201, 180, 88, 0.2)",
    shadow_color: "#C9B458",
};

const THEME_STEADY: PlanetTheme = PlanetTheme {
    color: "#5CB8A5",
    glow: "rgba(92, 184, 165, 0.2)",
    shadow_color: "#5CB8A5",
};

const THEME_DRIFTING: PlanetTheme = PlanetTheme {
    color: "#6B9FD4",
    glow: "rgba(107, 159, 212, 0.2)",
    shadow_color: "#6B9FD4",
};

// ── Ring constants (innermost to outermost) ─────────────────────────

const RING_FIXED: OrbitRing = OrbitRing {
    radius: 10.0,
    opacity: 0.25,
    color: "#6B9FD4",
};

const RING_RECURRING: OrbitRing = OrbitRing {
    radius: 16.0,
    opacity: 0.18,
    color: "#C9B458",
};

const RING_SURPRISE: OrbitRing = OrbitRing {
    radius: 22.0,
    opacity: 0.12,
    color: "#D4956A",
};

/// Maps a month's aggregate numbers onto presentation parameters:
/// a planet theme, decorative orbit rings, and a reflection line.
///
/// Pure lookup logic — the frontend only renders what comes out of here.
pub struct VisualService;

impl VisualService {
    pub fn new() -> Self {
        Self
    }

    /// Pick the planet theme for a month. Rules run top to bottom,
    /// first match wins.
    #[must_use]
    pub fn derive_theme(&self, month: &MonthData) -> PlanetTheme {
        if month.is_empty() {
            return THEME_QUIET;
        }

        let denominator = if month.income == 0.0 { 1.0 } else { month.income };
        let ratio = month.expense / denominator;

        if ratio > 1.0 {
            return THEME_OVERDRAWN;
        }
        if ratio > 0.85 {
            return THEME_STRAINED;
        }
        if ratio > 0.65 {
            return THEME_WATCHFUL;
        }
        if month.stability > 0.6 {
            return THEME_STEADY;
        }
        THEME_DRIFTING
    }

    /// Derive 0-3 orbit rings from a month's expense pattern.
    ///
    /// Each bucket with at least one expense contributes exactly one ring,
    /// always in fixed → recurring → surprise order (innermost first).
    #[must_use]
    pub fn derive_rings(&self, month: &MonthData) -> Vec<OrbitRing> {
        self.ring_kinds(month)
            .into_iter()
            .map(|kind| match kind {
                RingKind::Fixed => RING_FIXED,
                RingKind::Recurring => RING_RECURRING,
                RingKind::Surprise => RING_SURPRISE,
            })
            .collect()
    }

    /// The expense-pattern buckets present in a month, in ring order.
    #[must_use]
    pub fn ring_kinds(&self, month: &MonthData) -> Vec<RingKind> {
        let expenses: Vec<&Transaction> = month
            .transactions
            .iter()
            .filter(|tr| tr.kind == TransactionType::Expense)
            .collect();
        if expenses.is_empty() {
            return Vec::new();
        }

        let mut category_counts: HashMap<&str, usize> = HashMap::new();
        for e in &expenses {
            *category_counts.entry(e.category.as_str()).or_insert(0) += 1;
        }

        let has_fixed = expenses
            .iter()
            .any(|e| Transaction::is_fixed_category(&e.category));
        let has_recurring = category_counts.values().any(|&count| count > 1);
        let has_surprise = expenses.iter().any(|e| {
            !Transaction::is_fixed_category(&e.category)
                && category_counts[e.category.as_str()] == 1
        });

        let mut kinds = Vec::new();
        if has_fixed {
            kinds.push(RingKind::Fixed);
        }
        if has_recurring {
            kinds.push(RingKind::Recurring);
        }
        if has_surprise {
            kinds.push(RingKind::Surprise);
        }
        kinds
    }

    /// Pick the narrative reflection for a month. Rules run top to bottom,
    /// first match wins.
    #[must_use]
    pub fn derive_reflection(&self, month: &MonthData) -> Reflection {
        if month.is_empty() {
            return Reflection::Silence;
        }
        if month.income == 0.0 && month.expense > 0.0 {
            return Reflection::Outward;
        }
        if month.stability > 0.7 {
            return Reflection::Steady;
        }
        if month.stability > 0.4 {
            return Reflection::Drift;
        }
        if month.balance < 0.0 {
            return Reflection::Pull;
        }
        Reflection::Movement
    }
}

impl Default for VisualService {
    fn default() -> Self {
        Self::new()
    }
}
