//! TUI application state and event loop

use crate::service::WordService;
use crate::session::{Action, Notice, Request, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub service: &'a dyn WordService,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Quit,
    Play(Action),
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session, service: &'a dyn WordService) -> Self {
        Self {
            session,
            service,
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Turn a session notice into messages
    pub fn apply_notice(&mut self, notice: Notice) {
        match notice {
            Notice::Won { rounds } => {
                self.add_message(
                    &format!("🎉 You win! Solved in {rounds} {}", plural(rounds)),
                    MessageStyle::Success,
                );
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            Notice::Lost { target } => {
                self.add_message(&format!("You lose, the word was {target}"), MessageStyle::Error);
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            Notice::NotAWord(word) => {
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Notice::ServiceFailed(reason) => {
                self.add_message(&format!("⚠ {reason}"), MessageStyle::Error);
            }
        }
    }
}

const fn plural(rounds: usize) -> &'static str {
    if rounds == 1 { "guess" } else { "guesses" }
}

/// Map a key press to a control, given whether the game has ended
#[must_use]
pub fn control_for(key: KeyEvent, game_over: bool) -> Option<Control> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Control::Quit),
        KeyCode::Esc => Some(Control::Quit),
        KeyCode::Enter if game_over => Some(Control::Play(Action::NewGame)),
        KeyCode::Enter => Some(Control::Play(Action::Submit)),
        KeyCode::Backspace => Some(Control::Play(Action::Delete)),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Control::Play(Action::Letter(c))),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Game loop error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App<'_>) -> Result<()> {
    info!("Starting game session");

    if let Some(request) = app.session.start() {
        fulfil(terminal, &mut app, request).await?;
    }

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match control_for(key, app.session.game().is_over()) {
                Some(Control::Quit) => app.should_quit = true,
                Some(Control::Play(action)) => {
                    if let Some(request) = app.session.handle(action) {
                        fulfil(terminal, &mut app, request).await?;
                    }
                }
                None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("Session ended");
    Ok(())
}

/// Show the loading state, wait for the service, then drop keys pressed meanwhile
#[instrument(skip(terminal, app))]
async fn fulfil<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_>,
    request: Request,
) -> Result<()> {
    terminal.draw(|f| super::rendering::ui(f, app))?;

    let service = app.service;
    let notice = app.session.fulfil(service, request).await;

    let dropped = drain_pending_input()?;
    if dropped > 0 {
        debug!(dropped, "Ignored input received while loading");
    }

    if let Some(notice) = notice {
        app.apply_notice(notice);
    }
    Ok(())
}

/// Discard every terminal event already queued
fn drain_pending_input() -> io::Result<usize> {
    let mut dropped = 0;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        dropped += 1;
    }
    Ok(dropped)
}
