// crates/generate_betting_prompt/src/session.rs

//! Line-oriented editing loop.
//!
//! Each input line is one user event. Events are handled one at a time and
//! the prompt is recomposed from the new snapshot after every mutation.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use compose_prompt::compose;
use config_store::{Configuration, ScalarField, SetField};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::copy_status::{copy_prompt, CopyAcknowledgement};
use crate::services::Clipboard;

// `verb [target [rest of line]]`
static COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)(?:\s+(\S+))?(?:\s+(.*))?$").unwrap());

const HELP: &str = "\
Commands:
  set <field> [value]          fields: sport event matchup market bankroll risk voice note custom-guardrail
  toggle <focus|guardrails> <id>  guardrails accept a phrase or catalog number
  show                         print the current prompt
  copy                         copy the prompt to the clipboard
  status                       print the copy acknowledgement
  catalog                      list sports, voices, focus areas, risk postures and guardrails
  reset                        restore the defaults
  quit                         leave the session";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Set(ScalarField, String),
    Toggle(SetField, String),
    Show,
    Copy,
    Status,
    Catalog,
    Reset,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let caps = COMMAND_RE
        .captures(line)
        .ok_or_else(|| anyhow!("Could not parse '{}'", line.trim()))?;
    let verb = &caps[1];
    let target = caps.get(2).map(|m| m.as_str());
    let rest = caps.get(3).map(|m| m.as_str()).unwrap_or("");

    let command = match verb {
        "set" => {
            let field = target.ok_or_else(|| anyhow!("Usage: set <field> [value]"))?;
            SessionCommand::Set(field.parse()?, rest.to_string())
        }
        "toggle" => {
            let field = target.ok_or_else(|| anyhow!("Usage: toggle <focus|guardrails> <id>"))?;
            let field: SetField = field.parse()?;
            if rest.trim().is_empty() {
                return Err(anyhow!("Usage: toggle {} <id>", field));
            }
            let id = match field {
                SetField::FocusAreas => rest.trim(),
                SetField::Guardrails => betting_catalog::resolve_guardrail(rest.trim()),
            };
            SessionCommand::Toggle(field, id.to_string())
        }
        "show" => SessionCommand::Show,
        "copy" => SessionCommand::Copy,
        "status" => SessionCommand::Status,
        "catalog" | "list" => SessionCommand::Catalog,
        "reset" => SessionCommand::Reset,
        "help" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(anyhow!("Unknown command '{}'; try 'help'", other)),
    };
    Ok(Some(command))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The single writer of a [`Configuration`] plus the latest composed prompt.
pub struct Session {
    config: Configuration,
    prompt: String,
    ack: CopyAcknowledgement,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl Session {
    pub fn new(config: Configuration, clipboard: Option<Box<dyn Clipboard>>) -> Self {
        let prompt = compose(&config);
        Session {
            config,
            prompt,
            ack: CopyAcknowledgement::new(),
            clipboard,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    fn recompose(&mut self) {
        self.prompt = compose(&self.config);
    }

    /// Applies one command and writes its feedback to `out`.
    pub fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        debug!("session command: {:?}", command);
        match command {
            SessionCommand::Set(field, value) => {
                self.config.set_scalar(field, value);
                if field == ScalarField::BankrollPct {
                    if let Some(hint) = self.config.bankroll_hint() {
                        warn!("{}", hint);
                    }
                }
                self.recompose();
                writeln!(out, "{} = {:?}", field, self.config.scalar(field))?;
            }
            SessionCommand::Toggle(field, id) => {
                crate::cli::warn_if_uncatalogued(field, &id);
                let active = self.config.toggle_member(field, &id);
                self.recompose();
                writeln!(out, "{} {}{}", field, if active { '+' } else { '-' }, id)?;
            }
            SessionCommand::Show => writeln!(out, "{}", self.prompt)?,
            SessionCommand::Copy => match &self.clipboard {
                Some(clipboard) => {
                    let copied =
                        copy_prompt(&**clipboard, &self.prompt, &mut self.ack, Instant::now());
                    writeln!(out, "{}", if copied { "Copied" } else { "Copy failed" })?;
                }
                None => writeln!(out, "Clipboard disabled")?,
            },
            SessionCommand::Status => writeln!(out, "{}", self.ack.label(Instant::now()))?,
            SessionCommand::Catalog => crate::write_catalogs(out)?,
            SessionCommand::Reset => {
                self.config = Configuration::default();
                self.recompose();
                writeln!(out, "Configuration reset")?;
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parses and applies one line. Bad input is reported on `out` and the
    /// session carries on; only I/O errors are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match parse_command(line) {
            Ok(Some(command)) => self.apply(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
            out.flush().context("Failed to flush session output")?;
        }
        Ok(())
    }
}
