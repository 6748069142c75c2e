// crates/generate_betting_prompt/src/copy_status.rs

use std::time::{Duration, Instant};

use log::{error, info};

use crate::services::Clipboard;

/// How long the "Copied" acknowledgement stays up after a successful copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// Transient "Copied" flag.
///
/// Only the most recent copy counts, so a newer copy supersedes the window
/// of an older one and nothing ever needs cancelling.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyAcknowledgement {
    copied_at: Option<Instant>,
}

impl CopyAcknowledgement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < COPY_ACK_DURATION,
            None => false,
        }
    }

    /// Button text for the current state.
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied"
        } else {
            "Copy"
        }
    }
}

/// Copies the prompt and raises the acknowledgement on success.
///
/// A failed copy is logged and reported as `false`; nothing else changes.
pub fn copy_prompt<C: Clipboard + ?Sized>(
    clipboard: &C,
    prompt: &str,
    ack: &mut CopyAcknowledgement,
    now: Instant,
) -> bool {
    match clipboard.copy(prompt) {
        Ok(()) => {
            ack.mark_copied(now);
            info!("Prompt has been copied to clipboard.");
            true
        }
        Err(err) => {
            error!("Copy failed: {:#}", err);
            false
        }
    }
}
