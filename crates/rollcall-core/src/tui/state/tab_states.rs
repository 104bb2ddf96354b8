//! Per-tab state and popup forms.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::demographics::{self, DemographicData, survey_fields};
use crate::table::MemberVoteTable;
use crate::tui::navigable::NavigableList;
use crate::view::votes::StatusFilter;

// ===========================================================================
// Votes tab
// ===========================================================================

/// State for the votes-list tab.
#[derive(Debug, Default)]
pub struct VotesTabState {
    pub selected: usize,
    /// Free-text filter over title and summary.
    pub query: String,
    pub status: StatusFilter,
    pub ratatui_state: RatatuiTableState,
}

impl NavigableList for VotesTabState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }
}

impl VotesTabState {
    pub fn cycle_status(&mut self) {
        self.status = self.status.next();
        self.selected = 0;
    }

    /// Clamps the selection to the visible rows and syncs ratatui state.
    pub fn resolve_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.ratatui_state.select(None);
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.ratatui_state.select(Some(self.selected));
    }
}

// ===========================================================================
// Members tab
// ===========================================================================

/// State for the member-vote table tab. The table engine carries the
/// filter/sort/page configuration; this adds the ballot it applies to and
/// the row highlight within the visible page.
#[derive(Debug, Default)]
pub struct MembersTabState {
    /// Ballot whose breakdown is shown. `None` until a vote is opened.
    pub vote_id: Option<i64>,
    pub table: MemberVoteTable,
    pub selected: usize,
    pub ratatui_state: RatatuiTableState,
}

impl NavigableList for MembersTabState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }
}

impl MembersTabState {
    /// Opens a ballot, resetting the engine configuration and selection.
    pub fn open_vote(&mut self, vote_id: i64) {
        if self.vote_id != Some(vote_id) {
            self.table = MemberVoteTable::new();
            self.selected = 0;
        }
        self.vote_id = Some(vote_id);
    }

    /// Clamps the selection to the visible page and syncs ratatui state.
    pub fn resolve_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.ratatui_state.select(None);
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.ratatui_state.select(Some(self.selected));
    }
}

// ===========================================================================
// Leads tab
// ===========================================================================

/// State for the contact-requests tab.
#[derive(Debug, Default)]
pub struct LeadsTabState {
    pub selected: usize,
    /// Free-text search over name, e-mail, and message.
    pub search: String,
    pub ratatui_state: RatatuiTableState,
}

impl NavigableList for LeadsTabState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }
}

impl LeadsTabState {
    pub fn resolve_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.ratatui_state.select(None);
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.ratatui_state.select(Some(self.selected));
    }
}

// ===========================================================================
// Login form
// ===========================================================================

/// Field focus within the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login popup state.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// Last login failure shown below the fields.
    pub error: Option<String>,
}

impl LoginForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

// ===========================================================================
// Survey form
// ===========================================================================

/// Demographic survey popup state: a working copy of the answers plus a
/// cursor over the visible questions.
#[derive(Debug)]
pub struct SurveyForm {
    pub answers: DemographicData,
    pub field_idx: usize,
    /// Birth-year options, precomputed for the current year.
    years: Vec<String>,
}

impl SurveyForm {
    pub fn new(answers: DemographicData, current_year: i32) -> Self {
        Self {
            answers,
            field_idx: 0,
            years: demographics::year_options(current_year),
        }
    }

    pub fn field_count() -> usize {
        survey_fields().len()
    }

    pub fn select_prev(&mut self) {
        self.field_idx = self.field_idx.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.field_idx = (self.field_idx + 1).min(Self::field_count() - 1);
    }

    fn options_for(&self, key: &str) -> Vec<&str> {
        if key == "birthyear" {
            self.years.iter().map(String::as_str).collect()
        } else {
            survey_fields()
                .iter()
                .find(|f| f.key == key)
                .map(|f| f.options.iter().map(|(value, _)| *value).collect())
                .unwrap_or_default()
        }
    }

    /// Cycles the answer of the focused question through its options.
    /// An unanswered question starts at the first (or last) option.
    pub fn cycle_option(&mut self, forward: bool) {
        let field = &survey_fields()[self.field_idx];
        let options = self.options_for(field.key);
        if options.is_empty() {
            return;
        }

        let current = self.answers.get(field.key).cloned().unwrap_or_default();
        let idx = options.iter().position(|&o| o == current);
        let next = match (idx, forward) {
            (Some(i), true) => options[(i + 1) % options.len()],
            (Some(i), false) => options[(i + options.len() - 1) % options.len()],
            (None, true) => options[0],
            (None, false) => options[options.len() - 1],
        };
        let next = next.to_string();
        self.answers.set(field.key, next);
    }

    /// Display label of the focused question's current answer.
    pub fn answer_label(&self, field_idx: usize) -> String {
        let field = &survey_fields()[field_idx];
        let value = self.answers.get(field.key).cloned().unwrap_or_default();
        if value.is_empty() {
            return "—".to_string();
        }
        if field.key == "birthyear" {
            return value;
        }
        field
            .options
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| label.to_string())
            .unwrap_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_open_vote_resets_engine_only_on_change() {
        let mut tab = MembersTabState::default();
        tab.open_vote(7);
        tab.table.set_name_query("mu");
        tab.selected = 3;

        // Reopening the same ballot keeps the configuration.
        tab.open_vote(7);
        assert_eq!(tab.table.filter().name_query, "mu");
        assert_eq!(tab.selected, 3);

        // A different ballot starts fresh.
        tab.open_vote(8);
        assert!(tab.table.filter().name_query.is_empty());
        assert_eq!(tab.selected, 0);
    }

    #[test]
    fn resolve_selection_clamps_and_clears() {
        let mut tab = VotesTabState::default();
        tab.selected = 10;
        tab.resolve_selection(3);
        assert_eq!(tab.selected, 2);
        tab.resolve_selection(0);
        assert_eq!(tab.selected, 0);
        assert_eq!(tab.ratatui_state.selected(), None);
    }

    #[test]
    fn survey_cycles_options_with_wraparound() {
        let mut form = SurveyForm::new(DemographicData::default(), 2026);
        // Move to the gender question.
        form.select_next();
        assert_eq!(survey_fields()[form.field_idx].key, "gender");

        form.cycle_option(true);
        assert_eq!(form.answers.gender, "male");
        form.cycle_option(false);
        assert_eq!(form.answers.gender, "prefer_not_to_say");
        form.cycle_option(true);
        assert_eq!(form.answers.gender, "male");
    }

    #[test]
    fn survey_birthyear_cycles_through_year_options() {
        let mut form = SurveyForm::new(DemographicData::default(), 2026);
        assert_eq!(survey_fields()[form.field_idx].key, "birthyear");
        form.cycle_option(true);
        assert_eq!(form.answers.birthyear, "2016");
        form.cycle_option(true);
        assert_eq!(form.answers.birthyear, "2015");
    }

    #[test]
    fn survey_answer_labels_resolve_to_display_text() {
        let mut form = SurveyForm::new(DemographicData::default(), 2026);
        assert_eq!(form.answer_label(1), "—");
        form.answers.gender = "other".to_string();
        assert_eq!(form.answer_label(1), "Divers");
    }

    #[test]
    fn login_form_focus_toggles_between_fields() {
        let mut form = LoginForm::default();
        form.active_field_mut().push('a');
        assert_eq!(form.email, "a");
        form.toggle_focus();
        form.active_field_mut().push('b');
        assert_eq!(form.password, "b");
    }
}
