use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use std::io;

use generate_betting_prompt::cli;
use generate_betting_prompt::config::AppConfig;
use generate_betting_prompt::services::Clipboard;
use generate_betting_prompt::session::Session;

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.to_string().to_lowercase()),
    );
    // --verbose beats a quieter RUST_LOG default; per-module RUST_LOG directives still apply.
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    let matches = cli::command().get_matches();

    let mut app = AppConfig::from_env();
    app.verbose = matches.get_flag("verbose");
    app.interactive = matches.get_flag("interactive");
    app.list_catalogs = matches.get_flag("list");
    if matches.get_flag("no_copy") {
        app.disable_clipboard = true;
    }

    setup_logging(app.verbose);
    debug!("app config: {:?}", app);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if app.list_catalogs {
        return generate_betting_prompt::write_catalogs(&mut out);
    }

    let config = cli::configuration_from_matches(&matches);
    let clipboard = app.clipboard();

    if app.interactive {
        let clipboard = clipboard.map(|c| Box::new(c) as Box<dyn Clipboard>);
        let mut session = Session::new(config, clipboard);
        let stdin = io::stdin();
        return session
            .run(stdin.lock(), &mut out)
            .context("Interactive session failed");
    }

    generate_betting_prompt::emit_prompt(
        &config,
        clipboard.as_ref().map(|c| c as &dyn Clipboard),
        &mut out,
    )?;
    Ok(())
}
