use std::io::{Write, stdout};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use kgcomplete::app::App;
use kgcomplete::cli::Args;
use kgcomplete::config::{self, ConfigResult};
use kgcomplete::logging;
use kgcomplete::lookup::{format_option, lookup};
use kgcomplete::source::SuggestionSource;
use kgcomplete::worker::spawn_worker;

/// How long to wait for terminal input before polling lookups again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if args.lookup_target().is_some() {
        logging::init_stderr();
    } else {
        logging::init_file();
    }

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    args.apply_to(&mut config);

    let source = SuggestionSource::from_config(&config.server)?;
    let source_label = source.describe();
    log::info!("Suggestions from {}", source_label);
    let worker = spawn_worker(source);

    if let Some((endpoint, prefix)) = args.lookup_target() {
        if let Some(warning) = &warning {
            log::warn!("{}", warning);
        }

        let options = lookup(&worker, endpoint, prefix, config.server.top_n)?;
        let mut out = stdout().lock();
        for option in &options {
            writeln!(out, "{}", format_option(option))?;
        }
        return Ok(());
    }

    let mut app = App::new(config.field_bindings(), &worker, &config, source_label);
    app.status = warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    result?;

    println!("{}", serde_json::to_string_pretty(&app.values())?);
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    // Pasted text arrives as one event instead of a burst of keystrokes
    execute!(stdout(), EnableBracketedPaste)?;

    loop {
        app.poll_suggestions();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
