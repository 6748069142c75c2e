// crates/betting_catalog/src/lib.rs

//! Static reference data shared by the configuration store and the composer.
//!
//! Ids, labels and ordering are part of the output contract: the composer
//! iterates these slices directly, so reordering an entry changes the text
//! it produces.

/// Sports offered by the picker, in display order.
pub const SPORTS: &[&str] = &[
    "NFL",
    "NBA",
    "MLB",
    "NHL",
    "NCAA Football",
    "NCAA Basketball",
    "Soccer",
    "UFC",
    "Tennis",
    "eSports",
];

/// Narrative voices as `(id, label)` pairs.
pub const VOICES: &[(&str, &str)] = &[
    ("pro", "Professional analyst"),
    ("sharp", "Sharp bettor"),
    ("math", "Quant-heavy"),
    ("casual", "Casual explanation"),
    ("hype", "High-energy hype"),
];

/// Analytical focus areas as `(id, label)` pairs, in catalog order.
pub const FOCUS_AREAS: &[(&str, &str)] = &[
    ("lineMovement", "Line movement"),
    ("matchups", "Matchup edges"),
    ("injuries", "Injuries & rest"),
    ("models", "Model projections"),
    ("trends", "Historical trends"),
    ("bankroll", "Bankroll strategy"),
    ("betTypes", "Alternative market ideas"),
];

pub const RISK_POSTURES: &[&str] = &["Conservative", "Balanced", "Aggressive", "High-variance"];

/// Guardrail phrases. A guardrail is identified by its phrase.
pub const GUARDRAILS: &[&str] = &[
    "Reference sharp sportsbook odds only",
    "Quantify confidence with implied probability",
    "Flag if wager exceeds bankroll guidelines",
    "Highlight correlated markets to avoid",
    "Keep answer under 250 words",
];

pub const DEFAULT_SPORT: &str = "NFL";
pub const DEFAULT_MARKET: &str = "Spread";
pub const DEFAULT_BANKROLL_PCT: &str = "2.5";
pub const DEFAULT_RISK_POSTURE: &str = "Balanced";
pub const DEFAULT_VOICE: &str = "pro";
pub const DEFAULT_FOCUS_AREAS: &[&str] = &["lineMovement", "matchups"];

/// Label used when a voice id has no catalog entry.
pub const FALLBACK_VOICE_LABEL: &str = "Professional analyst";

/// Display range for the bankroll exposure input. Used for hinting only.
pub const BANKROLL_MIN: f64 = 0.25;
pub const BANKROLL_MAX: f64 = 10.0;
pub const BANKROLL_STEP: f64 = 0.25;

/// The guardrails selected in a fresh configuration: the first catalog entry.
pub fn default_guardrails() -> &'static [&'static str] {
    &GUARDRAILS[..1]
}

/// Looks up the display label for a voice id.
pub fn voice_label(id: &str) -> Option<&'static str> {
    VOICES
        .iter()
        .find(|(voice_id, _)| *voice_id == id)
        .map(|(_, label)| *label)
}

/// Looks up the display label for a focus id.
pub fn focus_label(id: &str) -> Option<&'static str> {
    FOCUS_AREAS
        .iter()
        .find(|(focus_id, _)| *focus_id == id)
        .map(|(_, label)| *label)
}

pub fn is_focus_id(id: &str) -> bool {
    focus_label(id).is_some()
}

pub fn is_guardrail(phrase: &str) -> bool {
    GUARDRAILS.contains(&phrase)
}

/// Resolves a user-supplied guardrail reference.
///
/// A 1-based catalog number (`"2"`) maps to the phrase at that position.
/// Anything else, including out-of-range numbers, is returned verbatim.
pub fn resolve_guardrail(reference: &str) -> &str {
    match reference.trim().parse::<usize>() {
        Ok(n) if (1..=GUARDRAILS.len()).contains(&n) => GUARDRAILS[n - 1],
        _ => reference,
    }
}
