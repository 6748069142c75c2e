// crates/generate_betting_prompt/src/cli.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use config_store::{Configuration, ScalarField, SetField};
use log::warn;

/// Flag ids for the scalar fields, paired with the field they set.
const SCALAR_ARGS: &[(&str, ScalarField, &str)] = &[
    ("sport", ScalarField::Sport, "Sport, e.g. NFL or Tennis"),
    ("event", ScalarField::EventName, "Event name, e.g. \"Championship Sunday\""),
    ("matchup", ScalarField::Matchup, "Matchup or participants, e.g. \"Bills @ Chiefs\""),
    ("market", ScalarField::Market, "Primary market: spread, total, player prop..."),
    ("bankroll", ScalarField::BankrollPct, "Bankroll exposure per wager in percent (0.25-10)"),
    ("risk", ScalarField::RiskPosture, "Risk posture, e.g. Conservative or Aggressive"),
    ("voice", ScalarField::Voice, "Narrative voice id (pro, sharp, math, casual, hype)"),
    ("note", ScalarField::ExtraNote, "Extra emphasis for the agent"),
    ("custom-guardrail", ScalarField::CustomGuardrailText, "Your own bankroll rule or risk filter"),
];

pub fn command() -> Command {
    let mut cmd = Command::new("generate_betting_prompt")
        .version("0.1.0")
        .about("Builds a betting-assistant system prompt from market, exposure and focus settings");

    for (id, _, help) in SCALAR_ARGS {
        // Free text: values such as "-1" or "--fade the public" are data, not flags.
        cmd = cmd.arg(
            Arg::new(*id)
                .long(*id)
                .num_args(1)
                .allow_hyphen_values(true)
                .help(*help),
        );
    }

    cmd.arg(
        Arg::new("toggle_focus")
            .long("toggle-focus")
            .action(ArgAction::Append)
            .value_name("ID")
            .help("Toggle a focus area on or off (repeatable)"),
    )
    .arg(
        Arg::new("toggle_guardrail")
            .long("toggle-guardrail")
            .action(ArgAction::Append)
            .value_name("PHRASE|NUMBER")
            .help("Toggle a guardrail by phrase or catalog number (repeatable)"),
    )
    .arg(
        Arg::new("clear_focus")
            .long("clear-focus")
            .help("Start with no focus areas selected")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("clear_guardrails")
            .long("clear-guardrails")
            .help("Start with no guardrails selected")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("list")
            .long("list")
            .help("Print the sport, voice, focus, risk and guardrail catalogs")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("interactive")
            .long("interactive")
            .short('i')
            .help("Edit the configuration line by line on stdin")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("no_copy")
            .long("no-copy")
            .help("Do not copy the prompt to the clipboard")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("verbose")
            .long("verbose")
            .help("Enable verbose logging")
            .action(ArgAction::SetTrue),
    )
}

/// Builds the starting configuration: defaults, then clears, then scalar
/// flags, then toggles in the order given.
pub fn configuration_from_matches(matches: &ArgMatches) -> Configuration {
    let mut config = Configuration::default();

    if matches.get_flag("clear_focus") {
        config.clear_set(SetField::FocusAreas);
    }
    if matches.get_flag("clear_guardrails") {
        config.clear_set(SetField::Guardrails);
    }

    for (id, field, _) in SCALAR_ARGS {
        if let Some(value) = matches.get_one::<String>(*id) {
            config.set_scalar(*field, value.as_str());
        }
    }

    for id in matches.get_many::<String>("toggle_focus").unwrap_or_default() {
        warn_if_uncatalogued(SetField::FocusAreas, id);
        config.toggle_member(SetField::FocusAreas, id);
    }
    for reference in matches
        .get_many::<String>("toggle_guardrail")
        .unwrap_or_default()
    {
        let phrase = betting_catalog::resolve_guardrail(reference);
        warn_if_uncatalogued(SetField::Guardrails, phrase);
        config.toggle_member(SetField::Guardrails, phrase);
    }

    config
}

/// Toggles outside the catalogs are still applied; this only makes typos visible.
pub fn warn_if_uncatalogued(field: SetField, id: &str) {
    if let Some(hint) = field.catalog_hint(id) {
        warn!("{}", hint);
    }
}
