// crates/config_store/src/lib.rs

//! Holds the user-adjustable fields of a betting prompt.
//!
//! Every write is accepted as-is. The only feedback the store gives is
//! non-binding hints about the bankroll input and uncatalogued toggles, see
//! [`Configuration::bankroll_hint`] and [`SetField::catalog_hint`].

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use betting_catalog::{
    BANKROLL_MAX, BANKROLL_MIN, BANKROLL_STEP, DEFAULT_BANKROLL_PCT, DEFAULT_FOCUS_AREAS,
    DEFAULT_MARKET, DEFAULT_RISK_POSTURE, DEFAULT_SPORT, DEFAULT_VOICE,
};
use log::debug;

/// Single-valued fields of a [`Configuration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarField {
    Sport,
    EventName,
    Matchup,
    Market,
    BankrollPct,
    RiskPosture,
    Voice,
    ExtraNote,
    CustomGuardrailText,
}

/// Multi-select fields of a [`Configuration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetField {
    FocusAreas,
    Guardrails,
}

impl ScalarField {
    pub const ALL: [ScalarField; 9] = [
        ScalarField::Sport,
        ScalarField::EventName,
        ScalarField::Matchup,
        ScalarField::Market,
        ScalarField::BankrollPct,
        ScalarField::RiskPosture,
        ScalarField::Voice,
        ScalarField::ExtraNote,
        ScalarField::CustomGuardrailText,
    ];

    /// The name used on the command line and in the interactive session.
    pub fn name(self) -> &'static str {
        match self {
            ScalarField::Sport => "sport",
            ScalarField::EventName => "event",
            ScalarField::Matchup => "matchup",
            ScalarField::Market => "market",
            ScalarField::BankrollPct => "bankroll",
            ScalarField::RiskPosture => "risk",
            ScalarField::Voice => "voice",
            ScalarField::ExtraNote => "note",
            ScalarField::CustomGuardrailText => "custom-guardrail",
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sport" => Ok(ScalarField::Sport),
            "event" | "eventName" => Ok(ScalarField::EventName),
            "matchup" => Ok(ScalarField::Matchup),
            "market" => Ok(ScalarField::Market),
            "bankroll" | "bankrollPct" => Ok(ScalarField::BankrollPct),
            "risk" | "riskPosture" => Ok(ScalarField::RiskPosture),
            "voice" => Ok(ScalarField::Voice),
            "note" | "extraNote" => Ok(ScalarField::ExtraNote),
            "custom-guardrail" | "customGuardrailText" => Ok(ScalarField::CustomGuardrailText),
            other => Err(anyhow!("Unknown field '{}'", other)),
        }
    }
}

impl SetField {
    pub fn name(self) -> &'static str {
        match self {
            SetField::FocusAreas => "focus",
            SetField::Guardrails => "guardrails",
        }
    }

    pub fn is_catalogued(self, id: &str) -> bool {
        match self {
            SetField::FocusAreas => betting_catalog::is_focus_id(id),
            SetField::Guardrails => betting_catalog::is_guardrail(id),
        }
    }

    /// Explains why `id` is outside this field's catalog, or `None` when it is catalogued.
    ///
    /// Such ids are still accepted by [`Configuration::toggle_member`].
    pub fn catalog_hint(self, id: &str) -> Option<String> {
        if self.is_catalogued(id) {
            return None;
        }
        Some(match self {
            SetField::FocusAreas => format!(
                "Focus area '{}' is not in the catalog and will not be rendered",
                id
            ),
            SetField::Guardrails => format!(
                "Guardrail '{}' is not in the catalog (use 1-{} or the full phrase); adding it verbatim",
                id,
                betting_catalog::GUARDRAILS.len()
            ),
        })
    }
}

impl fmt::Display for SetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SetField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" | "focusAreas" => Ok(SetField::FocusAreas),
            "guardrail" | "guardrails" => Ok(SetField::Guardrails),
            other => Err(anyhow!("Unknown multi-select field '{}'", other)),
        }
    }
}

/// The full set of user-chosen values at a point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub sport: String,
    pub event_name: String,
    pub matchup: String,
    pub market: String,
    /// Raw input, rendered verbatim.
    pub bankroll_pct: String,
    pub risk_posture: String,
    pub voice: String,
    /// Membership only; the composer renders in catalog order.
    pub focus_areas: Vec<String>,
    pub extra_note: String,
    /// Active guardrail phrases in activation order.
    pub guardrails: Vec<String>,
    /// Appended to the guardrails at composition time when non-blank.
    pub custom_guardrail_text: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            sport: DEFAULT_SPORT.to_string(),
            event_name: String::new(),
            matchup: String::new(),
            market: DEFAULT_MARKET.to_string(),
            bankroll_pct: DEFAULT_BANKROLL_PCT.to_string(),
            risk_posture: DEFAULT_RISK_POSTURE.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            focus_areas: DEFAULT_FOCUS_AREAS.iter().map(|s| s.to_string()).collect(),
            extra_note: String::new(),
            guardrails: betting_catalog::default_guardrails()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            custom_guardrail_text: String::new(),
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a scalar field unconditionally.
    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        debug!("set {} = {:?}", field, value);
        *self.scalar_mut(field) = value;
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Sport => &self.sport,
            ScalarField::EventName => &self.event_name,
            ScalarField::Matchup => &self.matchup,
            ScalarField::Market => &self.market,
            ScalarField::BankrollPct => &self.bankroll_pct,
            ScalarField::RiskPosture => &self.risk_posture,
            ScalarField::Voice => &self.voice,
            ScalarField::ExtraNote => &self.extra_note,
            ScalarField::CustomGuardrailText => &self.custom_guardrail_text,
        }
    }

    fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Sport => &mut self.sport,
            ScalarField::EventName => &mut self.event_name,
            ScalarField::Matchup => &mut self.matchup,
            ScalarField::Market => &mut self.market,
            ScalarField::BankrollPct => &mut self.bankroll_pct,
            ScalarField::RiskPosture => &mut self.risk_posture,
            ScalarField::Voice => &mut self.voice,
            ScalarField::ExtraNote => &mut self.extra_note,
            ScalarField::CustomGuardrailText => &mut self.custom_guardrail_text,
        }
    }

    pub fn members(&self, field: SetField) -> &[String] {
        match field {
            SetField::FocusAreas => &self.focus_areas,
            SetField::Guardrails => &self.guardrails,
        }
    }

    fn members_mut(&mut self, field: SetField) -> &mut Vec<String> {
        match field {
            SetField::FocusAreas => &mut self.focus_areas,
            SetField::Guardrails => &mut self.guardrails,
        }
    }

    /// Flips membership of `id` in the named set.
    ///
    /// A present id is removed; an absent one is appended at the end.
    /// Returns `true` if `id` is a member afterwards.
    pub fn toggle_member(&mut self, field: SetField, id: &str) -> bool {
        if !field.is_catalogued(id) {
            debug!("{:?} is not in the {} catalog", id, field);
        }

        let members = self.members_mut(field);
        match members.iter().position(|m| m == id) {
            Some(idx) => {
                members.remove(idx);
                debug!("toggle {} -{:?}", field, id);
                false
            }
            None => {
                members.push(id.to_string());
                debug!("toggle {} +{:?}", field, id);
                true
            }
        }
    }

    pub fn contains(&self, field: SetField, id: &str) -> bool {
        self.members(field).iter().any(|m| m == id)
    }

    pub fn clear_set(&mut self, field: SetField) {
        self.members_mut(field).clear();
    }

    /// Describes why the bankroll input falls outside the display hint, if it does.
    ///
    /// This never rejects: the stored string is rendered verbatim regardless.
    pub fn bankroll_hint(&self) -> Option<String> {
        let raw = self.bankroll_pct.trim();
        let value = match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Some(format!("Bankroll exposure '{}' is not a number", self.bankroll_pct)),
        };
        if !(BANKROLL_MIN..=BANKROLL_MAX).contains(&value) {
            return Some(format!(
                "Bankroll exposure {}% is outside the suggested range {}-{}%",
                raw, BANKROLL_MIN, BANKROLL_MAX
            ));
        }
        let steps = value / BANKROLL_STEP;
        if (steps - steps.round()).abs() > 1e-9 {
            return Some(format!(
                "Bankroll exposure {}% is not a multiple of {}%",
                raw, BANKROLL_STEP
            ));
        }
        None
    }
}
