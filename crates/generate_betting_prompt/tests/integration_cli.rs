// crates/generate_betting_prompt/tests/integration_cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DEFAULT_PROMPT: &str = "\
You are a Professional analyst crafting a high-leverage betting plan.
Study the upcoming opportunity and produce a sharp, disciplined prompt for an AI betting assistant.

Context:
- Sport: NFL
- Primary market: Spread
- Bankroll exposure target: 2.5% per wager
- Risk tolerance: Balanced
- Analytical focus: Line movement, Matchup edges

Constraints:
- Reference sharp sportsbook odds only

Deliverable:
- One detailed system prompt ready for copy/paste
- Include call-to-action for value hunting and risk checks
- Close with bankroll reminder";

/// A command with the clipboard switched off and logging at its default level.
fn no_clipboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("generate_betting_prompt").unwrap();
    cmd.env("DISABLE_CLIPBOARD", "1")
        .env_remove("PROMPT_CLIPBOARD_CMD")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates an executable shell script that stands in for the clipboard program.
#[cfg(unix)]
fn fake_clipboard(dir: &TempDir, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.path().join("fake-clipboard");
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[cfg(unix)]
fn clipboard_cmd(script: &Path) -> Command {
    let mut cmd = Command::cargo_bin("generate_betting_prompt").unwrap();
    cmd.env_remove("DISABLE_CLIPBOARD")
        .env_remove("RUST_LOG")
        .env("PROMPT_CLIPBOARD_CMD", script);
    cmd
}

#[test]
fn test_default_prompt_on_stdout() {
    no_clipboard_cmd()
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_PROMPT))
        .stderr(predicate::str::contains("skipping clipboard copy"));
}

#[test]
fn test_flags_shape_the_prompt() {
    no_clipboard_cmd()
        .args([
            "--sport", "NBA",
            "--event", "Finals Game 7",
            "--matchup", "Celtics @ Lakers",
            "--market", "Total",
            "--bankroll", "1.5",
            "--risk", "Conservative",
            "--voice", "math",
            "--note", "  back-to-back fatigue ",
            "--toggle-focus", "matchups",
            "--toggle-focus", "injuries",
            "--toggle-guardrail", "2",
            "--custom-guardrail", "  Never bet parlays  ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "You are a Quant-heavy crafting a high-leverage betting plan.\n",
        ))
        .stdout(predicate::str::contains(
            "Context:\n\
             - Sport: NBA\n\
             - Event: Finals Game 7\n\
             - Matchup: Celtics @ Lakers\n\
             - Primary market: Total\n\
             - Bankroll exposure target: 1.5% per wager\n\
             - Risk tolerance: Conservative\n\
             - Analytical focus: Line movement, Injuries & rest\n\
             \n\
             Extra context: back-to-back fatigue\n\
             \n\
             Constraints:\n\
             - Reference sharp sportsbook odds only\n\
             - Quantify confidence with implied probability\n\
             - Never bet parlays\n\
             \n\
             Deliverable:",
        ));
}

#[test]
fn test_cleared_sets_drop_optional_sections() {
    no_clipboard_cmd()
        .args(["--clear-focus", "--clear-guardrails"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analytical focus").not())
        .stdout(predicate::str::contains("Constraints:").not())
        .stdout(predicate::str::contains("- Risk tolerance: Balanced\n\nDeliverable:"));
}

#[test]
fn test_out_of_range_bankroll_is_rendered_and_warned() {
    no_clipboard_cmd()
        .args(["--bankroll", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Bankroll exposure target: 25% per wager"))
        .stderr(predicate::str::contains("outside the suggested range"));

    no_clipboard_cmd()
        .args(["--bankroll", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Bankroll exposure target: -1% per wager"))
        .stderr(predicate::str::contains("outside the suggested range"));
}

#[test]
fn test_hyphenated_free_text_is_accepted() {
    no_clipboard_cmd()
        .args(["--market", "-3.5 spread", "--note", "--fade the public"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Primary market: -3.5 spread\n"))
        .stdout(predicate::str::contains("Extra context: --fade the public\n"));
}

#[test]
fn test_uncatalogued_guardrail_number_is_warned() {
    no_clipboard_cmd()
        .args(["--toggle-guardrail", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- 6\n"))
        .stderr(predicate::str::contains("Guardrail '6' is not in the catalog"));
}

#[test]
fn test_session_warns_on_uncatalogued_focus() {
    no_clipboard_cmd()
        .arg("-i")
        .write_stdin("toggle focus weather\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("focus +weather"))
        .stderr(predicate::str::contains("Focus area 'weather' is not in the catalog"));
}

#[test]
fn test_verbose_overrides_quieter_rust_log() {
    no_clipboard_cmd()
        .env("RUST_LOG", "warn")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("app config:"));
}

#[test]
fn test_list_catalogs() {
    no_clipboard_cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sports: NFL, NBA, MLB"))
        .stdout(predicate::str::contains("  sharp        Sharp bettor"))
        .stdout(predicate::str::contains("  1. Reference sharp sportsbook odds only"));
}

#[test]
fn test_unknown_flag_fails() {
    no_clipboard_cmd()
        .arg("--stake")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--stake"));
}

#[test]
fn test_interactive_session() {
    no_clipboard_cmd()
        .arg("--interactive")
        .write_stdin(
            "set sport Tennis\n\
             toggle focus trends\n\
             toggle guardrails 1\n\
             launch rockets\n\
             show\n\
             quit\n\
             set sport Soccer\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("sport = \"Tennis\""))
        .stdout(predicate::str::contains("focus +trends"))
        .stdout(predicate::str::contains("guardrails -Reference sharp sportsbook odds only"))
        .stdout(predicate::str::contains("error: Unknown command 'launch'"))
        .stdout(predicate::str::contains(
            "- Analytical focus: Line movement, Matchup edges, Historical trends",
        ))
        .stdout(predicate::str::contains("Constraints:").not())
        .stdout(predicate::str::contains("Soccer").not());
}

#[test]
#[cfg(unix)]
fn test_prompt_is_copied_to_clipboard() {
    let td = TempDir::new().unwrap();
    let captured = td.path().join("captured.txt");
    let script = fake_clipboard(&td, &format!("cat - > \"{}\"\n", captured.display()));

    clipboard_cmd(&script)
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_PROMPT))
        .stderr(predicate::str::contains("Prompt has been copied to clipboard."));

    assert_eq!(fs::read_to_string(&captured).unwrap(), DEFAULT_PROMPT);
}

#[test]
#[cfg(unix)]
fn test_clipboard_failure_is_not_fatal() {
    let td = TempDir::new().unwrap();
    let script = fake_clipboard(&td, "cat - >/dev/null\nexit 3\n");

    clipboard_cmd(&script)
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_PROMPT))
        .stderr(predicate::str::contains("Copy failed"));
}

#[test]
#[cfg(unix)]
fn test_no_copy_flag_skips_clipboard() {
    let td = TempDir::new().unwrap();
    let captured = td.path().join("captured.txt");
    let script = fake_clipboard(&td, &format!("cat - > \"{}\"\n", captured.display()));

    clipboard_cmd(&script).arg("--no-copy").assert().success();

    assert!(!captured.exists());
}

#[test]
#[cfg(unix)]
fn test_interactive_copy_then_status() {
    let td = TempDir::new().unwrap();
    let captured = td.path().join("captured.txt");
    let script = fake_clipboard(&td, &format!("cat - > \"{}\"\n", captured.display()));

    clipboard_cmd(&script)
        .arg("-i")
        .write_stdin("set market Moneyline\ncopy\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied\nCopied\n"));

    let copied = fs::read_to_string(&captured).unwrap();
    assert!(copied.contains("- Primary market: Moneyline\n"));
}
