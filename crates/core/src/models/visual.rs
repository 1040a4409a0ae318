use serde::{Deserialize, Serialize};

/// Color triple driving a month's planet rendering.
///
/// Values come from a closed six-entry palette; the frontend never mixes
/// its own colors. Derived output only, hence serialize-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetTheme {
    /// Primary planet color
    pub color: &'static str,

    /// Soft glow behind the planet
    pub glow: &'static str,

    /// Drop-shadow color
    pub shadow_color: &'static str,
}

/// One decorative orbit ring around a month's planet.
///
/// Rings are emitted innermost-first; the order carries meaning for the
/// renderer and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitRing {
    /// Ring radius offset from the planet surface
    pub radius: f64,

    /// Ring opacity
    pub opacity: f64,

    /// Ring stroke color
    pub color: &'static str,
}

/// Expense-pattern bucket an orbit ring represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingKind {
    /// At least one expense in a recurring-by-nature category
    Fixed,
    /// Some category repeats within the month
    Recurring,
    /// A one-off expense outside the fixed set
    Surprise,
}

/// Narrative tone for a month, shown in the month detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reflection {
    /// No transactions at all
    Silence,
    /// Only money going out
    Outward,
    /// High stability
    Steady,
    /// Middling stability
    Drift,
    /// Negative balance
    Pull,
    /// Everything else
    Movement,
}
