//! scaler_tui - Interactive TUI for assigning challenge-rating tiers to NPCs

mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scaler_core::config::Settings;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let config_path = std::env::var_os("SCALER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scaler.toml"));
    let settings = Settings::load_or_default(&config_path)?;

    let _guard = setup_logging()?;

    let mut app = App::new(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Char(c), _) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            app.on_digit(digit);
                        }
                    }
                    (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.apply_pending(),
                    (KeyCode::Char('s'), _) => app.save(),
                    (KeyCode::Char('r'), _) => app.reload(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn setup_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = std::env::var_os("SCALER_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("npc-scaler"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "scaler_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/scaler_tui.log", log_dir.display());

    Ok(guard)
}
