//! Main application state.

use crate::models::{Lead, Vote};
use crate::store::{Appearance, Session};

use super::{InputMode, LeadsTabState, MembersTabState, PopupState, Tab, VotesTabState};

/// Main application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Filter input buffer, synced from the current tab's filter when
    /// entering filter mode.
    pub filter_input: String,
    /// Active popup. Only one popup can be open at a time.
    pub popup: PopupState,
    /// Appearance preference (persisted).
    pub appearance: Appearance,
    /// Whether the summary panel is expanded (persisted).
    pub sidebar_open: bool,
    /// Authenticated session, `None` while logged out.
    pub session: Option<Session>,
    /// Fetched ballots, including their member breakdowns.
    pub votes: Vec<Vote>,
    /// Fetched contact requests.
    pub leads: Vec<Lead>,
    /// Last payload fetch failure, rendered in place of the affected tab.
    pub fetch_error: Option<String>,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    /// Votes tab state.
    pub votes_tab: VotesTabState,
    /// Members tab state (hosts the table engine configuration).
    pub members_tab: MembersTabState,
    /// Leads tab state.
    pub leads_tab: LeadsTabState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filter string for the current tab.
    pub fn current_filter(&self) -> &str {
        match self.current_tab {
            Tab::Votes => &self.votes_tab.query,
            Tab::Members => &self.members_tab.table.filter().name_query,
            Tab::Leads => &self.leads_tab.search,
        }
    }

    /// Applies the filter buffer to the current tab.
    pub fn apply_filter_input(&mut self) {
        let value = self.filter_input.clone();
        match self.current_tab {
            Tab::Votes => {
                self.votes_tab.query = value;
                self.votes_tab.selected = 0;
            }
            Tab::Members => self.members_tab.table.set_name_query(value),
            Tab::Leads => {
                self.leads_tab.search = value;
                self.leads_tab.selected = 0;
            }
        }
    }

    /// Switches to a new tab and syncs the filter buffer from it.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.filter_input = self.current_filter().to_string();
        }
    }

    /// The ballot currently opened on the Members tab.
    pub fn current_vote(&self) -> Option<&Vote> {
        let vote_id = self.members_tab.vote_id?;
        self.votes.iter().find(|v| v.id == vote_id)
    }

    /// True while no session exists; every interaction except login and
    /// quitting is blocked.
    pub fn is_gated(&self) -> bool {
        self.session.is_none()
    }

    /// Replaces the payloads after a fetch, keeping tab configurations but
    /// dropping derived caches and stale selections.
    pub fn set_payloads(&mut self, votes: Vec<Vote>, leads: Vec<Lead>) {
        self.votes = votes;
        self.leads = leads;
        self.fetch_error = None;
        self.members_tab.table.invalidate();
        if self.current_vote().is_none() {
            self.members_tab.vote_id = None;
        }
    }
}
