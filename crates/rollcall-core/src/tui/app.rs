//! Main TUI application.

use std::io;
use std::time::Duration;

use chrono::Datelike;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::client::{ClientError, VoteSource};
use crate::models::VotePosition;
use crate::store::LocalStore;
use crate::table::{ConfigError, SortField, SortOrder};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, LoginForm, PopupState, SurveyForm};

/// Main TUI application.
pub struct App {
    source: Box<dyn VoteSource>,
    store: LocalStore,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over a payload source and the local store.
    /// Persisted preferences and a stored session are picked up here.
    pub fn new(mut source: Box<dyn VoteSource>, store: LocalStore) -> Self {
        let mut state = AppState::new();
        state.appearance = store.appearance();
        state.sidebar_open = store.sidebar_open();
        state.session = store.session();
        if let Some(session) = &state.session {
            source.set_token(&session.token);
        }
        Self {
            source,
            store,
            state,
            should_quit: false,
        }
    }

    /// Applies validated table defaults (sort field, position filter, page
    /// size) before the first render. Errors are the caller's to report;
    /// nothing is partially applied on failure.
    pub fn configure_table(
        &mut self,
        sort: SortField,
        position: Option<VotePosition>,
        page_size: usize,
    ) -> Result<(), ConfigError> {
        let table = &mut self.state.members_tab.table;
        table.set_page_size(page_size)?;
        table.set_sort(sort, SortOrder::Asc);
        table.set_position(position);
        Ok(())
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Auth gate: fetch with the stored session, or ask for one.
        if self.state.session.is_some() {
            self.refresh();
        } else {
            self.state.popup = PopupState::Login(LoginForm::default());
        }

        let events = EventHandler::new(tick_rate);

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => {
                    self.state.status_message = None;
                    let action = handle_key(&mut self.state, key);
                    self.dispatch(action);
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Refresh => self.refresh(),
            KeyAction::Login => self.login(),
            KeyAction::Logout => self.logout(),
            KeyAction::OpenSurvey => {
                let answers = self.store.demographics();
                let year = chrono::Local::now().year();
                self.state.popup = PopupState::Survey(SurveyForm::new(answers, year));
            }
            KeyAction::SaveSurvey => self.save_survey(),
            KeyAction::ToggleAppearance => {
                self.state.appearance = self.state.appearance.toggled();
                if let Err(err) = self.store.set_appearance(self.state.appearance) {
                    warn!("failed to persist appearance: {err}");
                }
            }
            KeyAction::ToggleSidebar => {
                self.state.sidebar_open = !self.state.sidebar_open;
                if let Err(err) = self.store.set_sidebar_open(self.state.sidebar_open) {
                    warn!("failed to persist sidebar flag: {err}");
                }
            }
        }
    }

    /// One-shot payload fetch. A 401 drops the stored session and reopens
    /// the login form; other failures are shown in place of the data.
    fn refresh(&mut self) {
        match self
            .source
            .fetch_votes()
            .and_then(|votes| self.source.fetch_leads().map(|leads| (votes, leads)))
        {
            Ok((votes, leads)) => {
                info!(votes = votes.len(), leads = leads.len(), "payload loaded");
                self.state.set_payloads(votes, leads);
            }
            Err(ClientError::Unauthorized) => {
                warn!("session rejected, returning to login");
                self.drop_session();
                self.state.popup = PopupState::Login(LoginForm {
                    error: Some("Sitzung abgelaufen, bitte neu anmelden.".to_string()),
                    ..LoginForm::default()
                });
            }
            Err(err) => {
                warn!("payload fetch failed: {err}");
                self.state.fetch_error = Some(format!("Laden fehlgeschlagen: {err}"));
            }
        }
    }

    fn login(&mut self) {
        let PopupState::Login(form) = &mut self.state.popup else {
            return;
        };
        let (email, password) = (form.email.clone(), form.password.clone());
        match self.source.login(&email, &password) {
            Ok(session) => {
                if let Err(err) = self.store.set_session(&session) {
                    warn!("failed to persist session: {err}");
                }
                self.state.session = Some(session);
                self.state.popup = PopupState::None;
                self.refresh();
            }
            Err(err) => {
                let PopupState::Login(form) = &mut self.state.popup else {
                    return;
                };
                form.password.clear();
                form.error = Some(match err {
                    ClientError::Unauthorized => "Anmeldung fehlgeschlagen.".to_string(),
                    other => other.to_string(),
                });
            }
        }
    }

    fn logout(&mut self) {
        self.drop_session();
        self.state.popup = PopupState::Login(LoginForm::default());
        self.state.status_message = Some("Abgemeldet.".to_string());
    }

    fn drop_session(&mut self) {
        if let Err(err) = self.store.clear_session() {
            warn!("failed to clear session: {err}");
        }
        self.state.session = None;
        self.state.votes.clear();
        self.state.leads.clear();
        self.state.members_tab.vote_id = None;
        self.state.members_tab.table.invalidate();
    }

    fn save_survey(&mut self) {
        let PopupState::Survey(form) = &self.state.popup else {
            return;
        };
        let year = chrono::Local::now().year();
        match self.store.save_demographics(&form.answers, year) {
            Ok(()) => {
                self.state.popup = PopupState::None;
                self.state.status_message = Some("Angaben gespeichert.".to_string());
            }
            Err(err) => {
                warn!("failed to persist survey answers: {err}");
                self.state.status_message = Some("Speichern fehlgeschlagen.".to_string());
            }
        }
    }
}
