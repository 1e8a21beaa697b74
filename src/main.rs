mod config;

use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{self, SetCursorStyle};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use goals_core::app::AppState;
use goals_core::key_event::{AppKeyCode, AppKeyEvent, AppMouseEvent};
use goals_core::ui;

use crate::config::Config;

// ── Event conversion ─────────────────────────────────────────────────────

fn convert_key(key: crossterm::event::KeyEvent) -> AppKeyEvent {
    let code = match key.code {
        KeyCode::Char(c) => AppKeyCode::Char(c),
        KeyCode::Backspace => AppKeyCode::Backspace,
        KeyCode::Enter => AppKeyCode::Enter,
        KeyCode::Left => AppKeyCode::Left,
        KeyCode::Right => AppKeyCode::Right,
        KeyCode::Up => AppKeyCode::Up,
        KeyCode::Down => AppKeyCode::Down,
        KeyCode::Tab => AppKeyCode::Tab,
        KeyCode::BackTab => AppKeyCode::BackTab,
        KeyCode::Delete => AppKeyCode::Delete,
        KeyCode::Home => AppKeyCode::Home,
        KeyCode::End => AppKeyCode::End,
        KeyCode::PageUp => AppKeyCode::PageUp,
        KeyCode::PageDown => AppKeyCode::PageDown,
        KeyCode::Esc => AppKeyCode::Esc,
        _ => AppKeyCode::Other,
    };
    AppKeyEvent {
        code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    }
}

fn convert_mouse(mouse: crossterm::event::MouseEvent) -> Option<AppMouseEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppMouseEvent::LeftClick {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(AppMouseEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(AppMouseEvent::ScrollDown),
        _ => None,
    }
}

// ── Logging ──────────────────────────────────────────────────────────────

/// The TUI owns stdout/stderr, so logs only go to a file.
fn init_logging(path: &Path, default_filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Main ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "goal-list")]
#[command(about = "Type goals and collect them in a list", long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/goal-list/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Clear the input after a goal is added
    #[arg(long)]
    clear_on_commit: bool,

    /// Ignore "Add goal" while the input is blank
    #[arg(long)]
    reject_empty: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the goals as JSON on exit
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    config.clear_draft_on_commit |= args.clear_on_commit;
    config.reject_empty |= args.reject_empty;

    if let Some(path) = &args.log_file {
        init_logging(path, &config.log_filter)?;
    }
    info!(?config, "starting goal-list");

    let mut app = AppState::new(config.app_options());

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app);
    let restored = restore_terminal();

    info!(goals = app.store.len(), "exiting");
    if args.print {
        let json = serde_json::to_string_pretty(app.store.goals())
            .context("Failed to serialize goals")?;
        println!("{json}");
    }
    finish(res, restored)
}

// ── Terminal lifecycle ───────────────────────────────────────────────────

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let entered = execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        event::EnableBracketedPaste,
        SetCursorStyle::SteadyBar
    )
    .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    match entered {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            // Setup error wins over any restore failure.
            let _ = restore_terminal();
            Err(err).context("Failed to set up the terminal")
        }
    }
}

/// Runs every step even when an earlier one fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        terminal::LeaveAlternateScreen,
        event::DisableMouseCapture,
        event::DisableBracketedPaste,
        SetCursorStyle::DefaultUserShape,
        cursor::Show
    );
    first_failure([
        raw.context("Failed to leave raw mode"),
        screen.context("Failed to restore the terminal screen"),
    ])
}

/// Report the event loop error (if any) once the terminal is back to normal,
/// so it reaches stderr and sets a failing exit status.
fn finish(run: Result<()>, restored: Result<()>) -> Result<()> {
    first_failure([run.context("Event loop failed"), restored])
}

fn first_failure<const N: usize>(results: [Result<()>; N]) -> Result<()> {
    results.into_iter().collect()
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::ui(f, app))?.area;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if app.handle_key(convert_key(key)) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(mouse) = convert_mouse(mouse) {
                    app.handle_mouse(mouse, area);
                }
            }
            Event::Paste(text) => app.handle_paste(&text),
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }
    Ok(())
}
