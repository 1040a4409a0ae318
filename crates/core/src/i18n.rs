//! Localized narrative strings for identities and month reflections.
//!
//! Only message text depends on the language; classification never does.

use serde::{Deserialize, Serialize};

use crate::models::identity::IdentityName;
use crate::models::visual::Reflection;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// Right-to-left script?
    #[must_use]
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// Localized display title for an identity, e.g. "The Builder".
#[must_use]
pub fn identity_title(lang: Language, name: IdentityName) -> &'static str {
    use IdentityName::*;
    match (lang, name) {
        (Language::En, Explorer) => "The Explorer",
        (Language::En, Builder) => "The Builder",
        (Language::En, Stabilizer) => "The Stabilizer",
        (Language::En, Observer) => "The Observer",
        (Language::En, Voyager) => "The Voyager",
        (Language::En, Drifter) => "The Drifter",
        (Language::Ar, Explorer) => "المستكشف",
        (Language::Ar, Builder) => "الباني",
        (Language::Ar, Stabilizer) => "المستقر",
        (Language::Ar, Observer) => "المراقب",
        (Language::Ar, Voyager) => "الرحالة",
        (Language::Ar, Drifter) => "المنجرف",
    }
}

/// Localized narrative message for an identity.
#[must_use]
pub fn identity_message(lang: Language, name: IdentityName) -> &'static str {
    use IdentityName::*;
    match (lang, name) {
        (Language::En, Explorer) => "Your orbit awaits. Add your first entry.",
        (Language::En, Builder) => "Your orbit is strengthening. Resources are gathering.",
        (Language::En, Stabilizer) => "You remained stable. The path is clear.",
        (Language::En, Observer) => "Your orbit is shifting. Stay aware.",
        (Language::En, Voyager) => "Many signals detected. Consider focusing your path.",
        (Language::En, Drifter) => "This month drifted slightly. Recalibrate when ready.",
        (Language::Ar, Explorer) => "مدارك بانتظارك. أضف أول إدخال.",
        (Language::Ar, Builder) => "مدارك يتعزز. الموارد تتجمع.",
        (Language::Ar, Stabilizer) => "بقيت ثابتًا. الطريق واضح.",
        (Language::Ar, Observer) => "مدارك يتغير. كن واعيًا.",
        (Language::Ar, Voyager) => "إشارات كثيرة. ركّز مسارك.",
        (Language::Ar, Drifter) => "هذا الشهر انجرف قليلاً. أعد المعايرة.",
    }
}

/// Localized text for a month reflection.
#[must_use]
pub fn reflection_text(lang: Language, reflection: Reflection) -> &'static str {
    use Reflection::*;
    match (lang, reflection) {
        (Language::En, Silence) => "Silence in the void. No signals this month.",
        (Language::En, Outward) => "Resources flowed outward. No signal returned.",
        (Language::En, Steady) => "This month was steady. You stayed in orbit.",
        (Language::En, Drift) => "A gentle drift. The balance shifted but held.",
        (Language::En, Pull) => "Gravitational pull was strong. The orbit bent.",
        (Language::En, Movement) => "This month carried movement. Reflect on the path.",
        (Language::Ar, Silence) => "سكون في الفراغ. لا إشارات.",
        (Language::Ar, Outward) => "الموارد تدفقت للخارج.",
        (Language::Ar, Steady) => "هذا الشهر كان متزنًا. بقيت في مدارك.",
        (Language::Ar, Drift) => "انجراف لطيف. التوازن تغيّر لكنه صمد.",
        (Language::Ar, Pull) => "الجاذبية كانت قوية. المدار انحنى.",
        (Language::Ar, Movement) => "هذا الشهر حمل حركة. تأمل المسار.",
    }
}
