// crates/compose_prompt/src/lib.rs

use betting_catalog::{FALLBACK_VOICE_LABEL, FOCUS_AREAS};
use config_store::Configuration;

const OPENING_INSTRUCTION: &str =
    "Study the upcoming opportunity and produce a sharp, disciplined prompt for an AI betting assistant.";

const DELIVERABLE_BLOCK: &str = "Deliverable:\n\
- One detailed system prompt ready for copy/paste\n\
- Include call-to-action for value hunting and risk checks\n\
- Close with bankroll reminder";

/// Renders a configuration snapshot into the final prompt text.
///
/// Pure and total: the same snapshot always yields the same string, and no
/// input makes it fail. Optional sections are omitted outright rather than
/// leaving empty lines behind.
pub fn compose(config: &Configuration) -> String {
    let voice = voice_label(&config.voice);
    let focus = focus_labels(&config.focus_areas);
    let details = context_lines(config, &focus);
    let constraints = constraint_list(config);

    let mut segments: Vec<String> = vec![
        format!("You are a {} crafting a high-leverage betting plan.", voice),
        OPENING_INSTRUCTION.to_string(),
        "\nContext:".to_string(),
        bullets(&details),
    ];

    let note = config.extra_note.trim();
    if !note.is_empty() {
        segments.push(format!("\nExtra context: {}", note));
    }

    if !constraints.is_empty() {
        segments.push(format!("\nConstraints:\n{}", bullets(&constraints)));
    }

    segments.push(format!("\n{}", DELIVERABLE_BLOCK));
    segments.join("\n")
}

/// Resolves a voice id, falling back to the professional analyst label.
pub fn voice_label(id: &str) -> &'static str {
    betting_catalog::voice_label(id).unwrap_or(FALLBACK_VOICE_LABEL)
}

/// Joins the labels of the selected focus ids in catalog order.
///
/// Unknown ids are dropped. Returns an empty string when nothing resolves.
pub fn focus_labels(selected: &[String]) -> String {
    FOCUS_AREAS
        .iter()
        .filter(|(id, _)| selected.iter().any(|s| s == id))
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The "Context" entries, without their bullet prefix.
pub fn context_lines(config: &Configuration, focus_labels: &str) -> Vec<String> {
    let mut lines = vec![format!("Sport: {}", config.sport)];
    if !config.event_name.is_empty() {
        lines.push(format!("Event: {}", config.event_name));
    }
    if !config.matchup.is_empty() {
        lines.push(format!("Matchup: {}", config.matchup));
    }
    lines.push(format!("Primary market: {}", config.market));
    lines.push(format!(
        "Bankroll exposure target: {}% per wager",
        config.bankroll_pct
    ));
    lines.push(format!("Risk tolerance: {}", config.risk_posture));
    if !focus_labels.is_empty() {
        lines.push(format!("Analytical focus: {}", focus_labels));
    }
    lines
}

/// Active guardrails followed by the trimmed custom guardrail, if any.
pub fn constraint_list(config: &Configuration) -> Vec<String> {
    let mut list = config.guardrails.clone();
    let custom = config.custom_guardrail_text.trim();
    if !custom.is_empty() {
        list.push(custom.to_string());
    }
    list
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
