use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use gitbuddy::app::{config::AppConfig, r#loop::run_loop, state::AppState};
use gitbuddy::cli::Cli;
use gitbuddy::{infrastructure::clipboard, logging};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config errors surface before the terminal enters raw mode
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let log_path = config.log_path();
    if let Err(err) = logging::init_tracing(&log_path, cli.debug) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let clipboard = clipboard::from_backend(config.clipboard);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        theme = config.theme.label(),
        clipboard = clipboard.backend_name(),
        "starting gitbuddy"
    );

    let mut app_state = AppState::new(&config.keys, config.theme);
    if let Some(term) = cli.initial_search() {
        app_state.set_search_term(term);
    }

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, app_state, clipboard).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("exiting");
    res
}
