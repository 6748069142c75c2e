// crates/generate_betting_prompt/src/config.rs

use log::debug;

use crate::services::CommandClipboard;

/// Disables clipboard copying when set to any value.
pub const DISABLE_CLIPBOARD_ENV: &str = "DISABLE_CLIPBOARD";
/// Overrides the clipboard program, e.g. `xclip -selection clipboard`.
pub const CLIPBOARD_CMD_ENV: &str = "PROMPT_CLIPBOARD_CMD";

/// Runtime configuration composed from CLI flags + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub disable_clipboard: bool,
    pub clipboard_command: Option<String>,
    pub wayland: bool,
    pub interactive: bool,
    pub list_catalogs: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Reads the environment-backed settings. CLI flags are layered on by the caller.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig {
            disable_clipboard: lookup(DISABLE_CLIPBOARD_ENV).is_some(),
            clipboard_command: lookup(CLIPBOARD_CMD_ENV).filter(|s| !s.trim().is_empty()),
            wayland: lookup("WAYLAND_DISPLAY").is_some(),
            interactive: false,
            list_catalogs: false,
            verbose: false,
        };
        debug!("environment config: {:?}", config);
        config
    }

    /// The clipboard to use, or `None` when copying is disabled.
    pub fn clipboard(&self) -> Option<CommandClipboard> {
        if self.disable_clipboard {
            return None;
        }
        let clipboard = self
            .clipboard_command
            .as_deref()
            .and_then(CommandClipboard::from_command_line)
            .unwrap_or_else(|| CommandClipboard::platform_default(self.wayland));
        Some(clipboard)
    }
}
