//! Application state and key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dex_core::viewer::ViewState;
use dex_core::{HttpCatalogue, Session};

/// Whether keys go to navigation or to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Work a key press asks for. Variants other than `ToggleShiny` hit the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Search(String),
    ToggleShiny,
    Retry,
}

/// Main application state.
pub struct App {
    pub session: Session<HttpCatalogue>,

    /// Catalogue base URL, shown in the header.
    pub base_url: String,

    /// Search box contents.
    pub input: String,

    pub input_mode: InputMode,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Whether to show the help overlay.
    pub show_help: bool,
}

impl App {
    pub fn new(catalogue: HttpCatalogue) -> Self {
        Self {
            base_url: catalogue.base_url().to_string(),
            session: Session::new(catalogue),
            input: String::new(),
            input_mode: InputMode::Normal,
            should_quit: false,
            show_help: false,
        }
    }

    /// Updates local state for a key press and returns any catalogue work to do.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let query = std::mem::take(&mut self.input);
                if query.trim().is_empty() {
                    None
                } else {
                    Some(Action::Search(query))
                }
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input.clear();
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                None
            }
            KeyCode::Esc => {
                self.show_help = false;
                None
            }
            KeyCode::Char('r') if *self.session.view() == ViewState::StartupFailed => {
                Some(Action::Retry)
            }
            _ if self.startup_pending() => None,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(Action::Previous),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(Action::Next),
            KeyCode::Char('s') => Some(Action::ToggleShiny),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.input.clear();
                None
            }
            _ => None,
        }
    }

    /// Navigation is disabled until the first record has loaded.
    fn startup_pending(&self) -> bool {
        matches!(
            self.session.view(),
            ViewState::Loading | ViewState::StartupFailed
        )
    }

    /// Runs an action to completion. Failures land in the view state.
    pub async fn perform(&mut self, action: Action) {
        let result = match action {
            Action::Previous => match self.session.previous().await {
                Some(result) => result.map(|_| ()),
                None => Ok(()),
            },
            Action::Next => self.session.next().await.map(|_| ()),
            Action::Search(query) => self.session.search(&query).await.map(|_| ()),
            Action::Retry => self.session.start().await.map(|_| ()),
            Action::ToggleShiny => {
                self.session.toggle_shiny();
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::debug!("Lookup failed: {}", e);
        }
    }
}
