// crates/generate_betting_prompt/src/lib.rs

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use betting_catalog::{FOCUS_AREAS, GUARDRAILS, RISK_POSTURES, SPORTS, VOICES};
use compose_prompt::compose;
use config_store::Configuration;
use log::{info, warn};

pub mod cli;
pub mod config;
pub mod copy_status;
pub mod services;
pub mod session;

use copy_status::{copy_prompt, CopyAcknowledgement};
use services::Clipboard;

/// Composes the prompt for `config`, writes it to `out` and, when a
/// clipboard is given, copies it.
///
/// Returns whether the copy happened. A failed copy is logged and does not
/// make this function fail; only writing to `out` can.
pub fn emit_prompt<W: Write>(
    config: &Configuration,
    clipboard: Option<&dyn Clipboard>,
    out: &mut W,
) -> Result<bool> {
    if let Some(hint) = config.bankroll_hint() {
        warn!("{}", hint);
    }

    let prompt = compose(config);
    writeln!(out, "{}", prompt).context("Failed to write prompt")?;
    out.flush().context("Failed to flush prompt")?;

    match clipboard {
        Some(clipboard) => {
            let mut ack = CopyAcknowledgement::new();
            Ok(copy_prompt(clipboard, &prompt, &mut ack, Instant::now()))
        }
        None => {
            info!("Clipboard disabled; skipping clipboard copy.");
            Ok(false)
        }
    }
}

/// Prints every catalog in its canonical order.
pub fn write_catalogs<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Sports: {}", SPORTS.join(", "))?;
    writeln!(out, "Voices:")?;
    for (id, label) in VOICES {
        writeln!(out, "  {:<13}{}", id, label)?;
    }
    writeln!(out, "Focus areas:")?;
    for (id, label) in FOCUS_AREAS {
        writeln!(out, "  {:<13}{}", id, label)?;
    }
    writeln!(out, "Risk postures: {}", RISK_POSTURES.join(", "))?;
    writeln!(out, "Guardrails:")?;
    for (n, phrase) in GUARDRAILS.iter().enumerate() {
        writeln!(out, "  {}. {}", n + 1, phrase)?;
    }
    Ok(())
}
