//! Application state management.

mod app_state;
mod tab_states;

pub use app_state::*;
pub use tab_states::*;

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Votes,
    Members,
    Leads,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Votes, Tab::Members, Tab::Leads]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Votes => "ABSTIMMUNGEN",
            Tab::Members => "STIMMEN",
            Tab::Leads => "ANFRAGEN",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Votes => Tab::Members,
            Tab::Members => Tab::Leads,
            Tab::Leads => Tab::Votes,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Votes => Tab::Leads,
            Tab::Members => Tab::Votes,
            Tab::Leads => Tab::Members,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the per-tab filter; applied live on every keystroke.
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Login form. Shown whenever there is no session; the rest of the UI
    /// is unreachable until it succeeds.
    Login(LoginForm),
    /// Demographic survey form.
    Survey(SurveyForm),
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
