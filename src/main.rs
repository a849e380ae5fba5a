//! decktoc: browse a markdown deck with a scroll-synchronised table of contents.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use decktoc::app_state::{AppState, View};
use decktoc::config::Config;
use decktoc::formats::markdown::MarkdownFormat;
use decktoc::gate::{AccessGate, FileSessionStore, SessionStore};
use decktoc::hydrate::{self, HttpContentSource, SectionContent};
use decktoc::layout::measure;
use decktoc::location::Location;
use decktoc::section::describe;
use decktoc::viewport::{render, Viewport};
use decktoc::{input, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::time::Duration;
use std::{fs, io};
use tracing_subscriber::EnvFilter;

/// Poll interval, which is also the smooth-scroll frame length.
const FRAME: Duration = Duration::from_millis(16);

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: isize = 3;

#[derive(Parser)]
#[command(name = "decktoc")]
#[command(about = "Scroll-synchronised table of contents for markdown decks", long_about = None)]
struct Args {
    /// Deck file, optionally followed by #section
    #[arg(value_name = "DECK")]
    deck: String,

    /// Section to open at, overriding any #fragment
    #[arg(long, short = 's', value_name = "ID")]
    section: Option<String>,

    /// Config file (defaults to ./deck.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Endpoint returning section content as JSON
    #[arg(long, value_name = "URL")]
    content_url: Option<String>,

    /// Print the measured table of contents as JSON and exit
    #[arg(long)]
    toc: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut cfg = Config::load(args.config.as_deref())?;
    if args.content_url.is_some() {
        cfg.content_url = args.content_url;
    }

    let mut location = Location::parse(&args.deck);
    if let Some(section) = args.section {
        location.replace_fragment(section);
    }

    let document = input::load_document(location.resource(), &MarkdownFormat)
        .with_context(|| format!("failed to load {}", location.resource().display()))?;

    if args.toc {
        let viewport = Viewport::new(render(&document, cfg.wrap_width), cfg.line_height);
        let mut sections = describe(&document.sections);
        measure(&mut sections, &viewport);
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    // Hydration runs beside the UI loop and reports whenever it lands.
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, rx) = mpsc::channel();
    if let Some(url) = cfg.content_url.clone() {
        let source = HttpContentSource::new(url, cfg.content_api_key.clone());
        runtime.spawn(async move {
            if let Some(records) = hydrate::load(&source).await {
                // The UI may already have quit.
                let _ = tx.send(records);
            }
        });
    }

    let gate = cfg
        .password
        .clone()
        .map(|credential| AccessGate::new(credential, FileSessionStore::for_session()));
    let app = AppState::new(document, &cfg, location, gate);

    let result = run_tui(app, &rx);
    runtime.shutdown_background();
    result
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging() {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("decktoc");
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(log_file) = fs::File::create(log_dir.join("decktoc.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn run_tui<S: SessionStore>(
    mut app: AppState<S>,
    rx: &Receiver<Vec<SectionContent>>,
) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, rx);

    restore_terminal();
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

fn run_app<B: Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    app: &mut AppState<S>,
    rx: &Receiver<Vec<SectionContent>>,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let inner = ui::document_inner(area, app.has_toc());
        app.fit(usize::from(inner.width), usize::from(inner.height));

        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(records) = rx.try_recv() {
            app.apply_content(&records);
        }
        app.tick();

        if !event::poll(FRAME)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                match app.view {
                    View::Gate => match key.code {
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Enter => app.submit_gate(),
                        KeyCode::Backspace => {
                            app.gate_input.pop();
                        }
                        KeyCode::Char(c) => app.gate_input.push(c),
                        _ => {}
                    },
                    View::Deck => {
                        let page = isize::try_from(app.viewport.height().saturating_sub(1))
                            .unwrap_or(1)
                            .max(1);
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                            KeyCode::Char('n') | KeyCode::Tab => app.click_next(),
                            KeyCode::Char('p') | KeyCode::BackTab => app.click_prev(),
                            KeyCode::Char(c @ '1'..='9') => {
                                if let Ok(index) = usize::try_from(u32::from(c) - u32::from('1')) {
                                    app.click(index);
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                            KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                            KeyCode::PageUp => app.scroll_by(-page),
                            KeyCode::PageDown => app.scroll_by(page),
                            KeyCode::Home => app.jump(false),
                            KeyCode::End => app.jump(true),
                            _ => {}
                        }
                    }
                }
            }
            Event::Mouse(mouse) if app.view == View::Deck => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let hit = app
                        .deck
                        .navigation()
                        .and_then(|nav| ui::toc_entry_at(area, nav, mouse.column, mouse.row));
                    if let Some(index) = hit {
                        app.click(index);
                    }
                }
                MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_ROWS),
                MouseEventKind::ScrollDown => app.scroll_by(WHEEL_ROWS),
                _ => {}
            },
            _ => {}
        }
    }
}
