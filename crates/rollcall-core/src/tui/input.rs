//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::table::{SortField, unique_groups, unique_states};
use crate::models::VotePosition;

use super::navigable::NavigableList;
use super::state::{AppState, InputMode, LoginForm, PopupState, Tab};

/// Result of handling a key event. Variants other than `None` require a
/// service (store, portal client) and are executed by the app loop.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-fetch votes and leads.
    Refresh,
    /// Submit the login form.
    Login,
    /// Drop the session and return to the login form.
    Logout,
    /// Open the survey popup with the stored answers.
    OpenSurvey,
    /// Persist the survey form answers.
    SaveSurvey,
    /// Toggle and persist the appearance.
    ToggleAppearance,
    /// Toggle and persist the summary panel.
    ToggleSidebar,
}

/// Navigation action for unified selection dispatch.
enum NavAction {
    Up,
    Down,
    PageUp(usize),
    PageDown(usize),
    Home,
    End,
}

fn dispatch_navigation(state: &mut AppState, action: NavAction) {
    if let PopupState::Help { scroll } = &mut state.popup {
        match action {
            NavAction::Up => *scroll = scroll.saturating_sub(1),
            NavAction::Down => *scroll = scroll.saturating_add(1),
            NavAction::PageUp(n) => *scroll = scroll.saturating_sub(n),
            NavAction::PageDown(n) => *scroll = scroll.saturating_add(n),
            NavAction::Home => *scroll = 0,
            NavAction::End => {}
        }
        return;
    }

    let nav: &mut dyn NavigableList = match state.current_tab {
        Tab::Votes => &mut state.votes_tab,
        Tab::Members => &mut state.members_tab,
        Tab::Leads => &mut state.leads_tab,
    };
    match action {
        NavAction::Up => nav.select_up(),
        NavAction::Down => nav.select_down(),
        NavAction::PageUp(n) => nav.page_up(n),
        NavAction::PageDown(n) => nav.page_down(n),
        NavAction::Home => nav.home(),
        NavAction::End => nav.end(),
    }
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Ctrl-C always quits, even while gated.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match &state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Login(_) => return handle_login(state, key),
        PopupState::Survey(_) => return handle_survey(state, key),
        _ => {}
    }

    // Without a session only the login form is reachable.
    if state.is_gated() {
        state.popup = PopupState::Login(LoginForm::default());
        return KeyAction::None;
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_login(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let gated = state.is_gated();
    let PopupState::Login(form) = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            // The form is modal while logged out.
            if !gated {
                state.popup = PopupState::None;
            }
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.toggle_focus();
            KeyAction::None
        }
        KeyCode::Enter => KeyAction::Login,
        KeyCode::Backspace => {
            form.active_field_mut().pop();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            form.active_field_mut().push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_survey(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Survey(form) = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            // Discard the working copy.
            state.popup = PopupState::None;
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            form.select_prev();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            form.select_next();
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            form.cycle_option(true);
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            form.cycle_option(false);
            KeyAction::None
        }
        KeyCode::Enter => KeyAction::SaveSurvey,
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }

        // Help popup toggle
        KeyCode::Char('?') => {
            state.popup = match state.popup {
                PopupState::Help { .. } => PopupState::None,
                _ => PopupState::Help { scroll: 0 },
            };
            KeyAction::None
        }
        KeyCode::Esc if state.popup.is_open() => {
            state.popup = PopupState::None;
            KeyAction::None
        }

        // Tab navigation
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.switch_tab(Tab::Votes);
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.switch_tab(Tab::Members);
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.switch_tab(Tab::Leads);
            KeyAction::None
        }

        // Row navigation (or help scroll when the popup is open)
        KeyCode::Up | KeyCode::Char('k') => {
            dispatch_navigation(state, NavAction::Up);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dispatch_navigation(state, NavAction::Down);
            KeyAction::None
        }
        KeyCode::PageUp => {
            dispatch_navigation(state, NavAction::PageUp(10));
            KeyAction::None
        }
        KeyCode::PageDown => {
            dispatch_navigation(state, NavAction::PageDown(10));
            KeyAction::None
        }
        KeyCode::Home => {
            dispatch_navigation(state, NavAction::Home);
            KeyAction::None
        }
        KeyCode::End => {
            dispatch_navigation(state, NavAction::End);
            KeyAction::None
        }

        // Open the selected ballot's member table
        KeyCode::Enter => {
            if state.current_tab == Tab::Votes
                && let Some(id) = selected_vote_id(state)
            {
                state.members_tab.open_vote(id);
                state.switch_tab(Tab::Members);
            }
            KeyAction::None
        }

        // Filter mode
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input = state.current_filter().to_string();
            KeyAction::None
        }

        // Sorting (Members tab)
        KeyCode::Char('s') => {
            if state.current_tab == Tab::Members {
                state.members_tab.table.next_sort_field();
                state.members_tab.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if state.current_tab == Tab::Members {
                state.members_tab.table.toggle_sort_order();
                state.members_tab.selected = 0;
            }
            KeyAction::None
        }
        // Direct sort-column selection, toggling direction on repeat
        KeyCode::Char('N') => {
            sort_by(state, SortField::Name);
            KeyAction::None
        }
        KeyCode::Char('G') => {
            sort_by(state, SortField::Group);
            KeyAction::None
        }
        KeyCode::Char('V') => {
            sort_by(state, SortField::VotePosition);
            KeyAction::None
        }
        KeyCode::Char('B') => {
            sort_by(state, SortField::State);
            KeyAction::None
        }

        // Pagination (Members tab)
        KeyCode::Right | KeyCode::Char('n') => {
            if state.current_tab == Tab::Members {
                state.members_tab.table.next_page();
                state.members_tab.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if state.current_tab == Tab::Members {
                state.members_tab.table.prev_page();
                state.members_tab.selected = 0;
            }
            KeyAction::None
        }
        KeyCode::Char('z') => {
            if state.current_tab == Tab::Members {
                state.members_tab.table.cycle_page_size();
                state.members_tab.selected = 0;
            }
            KeyAction::None
        }

        // Dropdown-style filters (Members tab) and status filter (Votes tab)
        KeyCode::Char('f') => {
            if state.current_tab == Tab::Members {
                cycle_position_filter(state);
            }
            KeyAction::None
        }
        KeyCode::Char('g') => {
            if state.current_tab == Tab::Members {
                cycle_group_filter(state);
            }
            KeyAction::None
        }
        KeyCode::Char('b') => {
            if state.current_tab == Tab::Members {
                cycle_state_filter(state);
            }
            KeyAction::None
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if state.current_tab == Tab::Members {
                state.members_tab.table.reset_filters();
                state.members_tab.selected = 0;
                state.filter_input.clear();
            }
            KeyAction::None
        }
        KeyCode::Char('c') => {
            if state.current_tab == Tab::Votes {
                state.votes_tab.cycle_status();
            }
            KeyAction::None
        }

        // Services handled by the app loop
        KeyCode::Char('u') | KeyCode::Char('U') => KeyAction::Refresh,
        KeyCode::Char('t') | KeyCode::Char('T') => KeyAction::ToggleAppearance,
        KeyCode::Char('o') | KeyCode::Char('O') => KeyAction::ToggleSidebar,
        KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::OpenSurvey,
        KeyCode::Char('L') => KeyAction::Logout,

        _ => KeyAction::None,
    }
}

/// Handles keys in filter mode. The filter is applied live on every edit.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.apply_filter_input();
            KeyAction::None
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            state.apply_filter_input();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            state.apply_filter_input();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn selected_vote_id(state: &AppState) -> Option<i64> {
    let cards = crate::view::votes::build_votes_view(
        &state.votes,
        &state.votes_tab.query,
        state.votes_tab.status,
    );
    cards.get(state.votes_tab.selected).map(|c| c.id)
}

fn sort_by(state: &mut AppState, field: SortField) {
    if state.current_tab == Tab::Members {
        state.members_tab.table.sort_by(field);
        state.members_tab.selected = 0;
    }
}

/// Cycles the position filter: all → for → against → abstention →
/// did_not_vote → all.
fn cycle_position_filter(state: &mut AppState) {
    let next = match state.members_tab.table.filter().position {
        None => Some(VotePosition::For),
        Some(VotePosition::For) => Some(VotePosition::Against),
        Some(VotePosition::Against) => Some(VotePosition::Abstention),
        Some(VotePosition::Abstention) => Some(VotePosition::DidNotVote),
        Some(VotePosition::DidNotVote) => None,
    };
    state.members_tab.table.set_position(next);
    state.members_tab.selected = 0;
}

/// Cycles the group filter through the distinct groups of the open ballot.
fn cycle_group_filter(state: &mut AppState) {
    let options = state
        .current_vote()
        .map(|v| unique_groups(&v.member_votes))
        .unwrap_or_default();
    let next = next_option(&options, state.members_tab.table.filter().group.as_deref());
    state.members_tab.table.set_group(next);
    state.members_tab.selected = 0;
}

/// Cycles the state filter through the distinct states of the open ballot.
fn cycle_state_filter(state: &mut AppState) {
    let options = state
        .current_vote()
        .map(|v| unique_states(&v.member_votes))
        .unwrap_or_default();
    let next = next_option(&options, state.members_tab.table.filter().state.as_deref());
    state.members_tab.table.set_state(next);
    state.members_tab.selected = 0;
}

/// `None` → first option → ... → last option → `None`.
fn next_option(options: &[String], current: Option<&str>) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    match current {
        None => Some(options[0].clone()),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vote;
    use crate::store::Session;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn vote(id: i64, title: &str) -> Vote {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "vote_date": "2025-01-01",
            "status": "completed",
            "member_votes": [
                { "id": 1, "first_name": "Anna", "last_name": "Berger",
                  "vote_position": "for", "group": "Grüne", "state": "Berlin" },
                { "id": 2, "first_name": "Bernd", "last_name": "Clausen",
                  "vote_position": "against", "group": "SPD", "state": "Bayern" }
            ]
        }))
        .unwrap()
    }

    fn logged_in_state() -> AppState {
        let mut state = AppState::new();
        state.session = Some(Session {
            token: "t".to_string(),
            user_name: None,
        });
        state.votes = vec![vote(1, "Erstes Gesetz"), vote(2, "Zweites Gesetz")];
        state
    }

    #[test]
    fn tabs_switch_with_number_keys() {
        let mut state = logged_in_state();
        assert_eq!(state.current_tab, Tab::Votes);
        let _ = handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Leads);
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Votes);
    }

    #[test]
    fn gated_state_forces_the_login_popup() {
        let mut state = AppState::new();
        let action = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(action, KeyAction::None);
        assert!(matches!(state.popup, PopupState::Login(_)));
        assert_eq!(state.current_tab, Tab::Votes);
    }

    #[test]
    fn login_form_collects_input_and_submits() {
        let mut state = AppState::new();
        state.popup = PopupState::Login(LoginForm::default());

        for c in "a@b.de".chars() {
            let _ = handle_key(&mut state, key(KeyCode::Char(c)));
        }
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        let _ = handle_key(&mut state, key(KeyCode::Char('p')));
        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::Login);

        let PopupState::Login(form) = &state.popup else {
            panic!("login popup should stay open until the app confirms");
        };
        assert_eq!(form.email, "a@b.de");
        assert_eq!(form.password, "p");
    }

    #[test]
    fn filter_mode_applies_live_to_the_members_table() {
        let mut state = logged_in_state();
        state.members_tab.open_vote(1);
        state.switch_tab(Tab::Members);

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Filter);
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.members_tab.table.filter().name_query, "a");

        // Esc cancels and clears.
        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.members_tab.table.filter().name_query, "");
    }

    #[test]
    fn enter_on_a_vote_drills_down_to_members() {
        let mut state = logged_in_state();
        state.votes_tab.selected = 1;
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.current_tab, Tab::Members);
        // Votes are date-sorted; both sample votes share a date, so payload
        // order is kept and index 1 is vote 2.
        assert_eq!(state.members_tab.vote_id, Some(2));
    }

    #[test]
    fn sort_keys_cycle_field_and_direction() {
        let mut state = logged_in_state();
        state.members_tab.open_vote(1);
        state.switch_tab(Tab::Members);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.members_tab.table.sort_field(), SortField::Group);

        let _ = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(
            state.members_tab.table.sort_order(),
            crate::table::SortOrder::Desc
        );

        // Selecting the active field directly toggles direction.
        let _ = handle_key(&mut state, key(KeyCode::Char('G')));
        assert_eq!(
            state.members_tab.table.sort_order(),
            crate::table::SortOrder::Asc
        );
    }

    #[test]
    fn dropdown_filters_cycle_through_options_and_back_to_all() {
        let mut state = logged_in_state();
        state.members_tab.open_vote(1);
        state.switch_tab(Tab::Members);

        let _ = handle_key(&mut state, key(KeyCode::Char('g')));
        assert_eq!(
            state.members_tab.table.filter().group.as_deref(),
            Some("Grüne")
        );
        let _ = handle_key(&mut state, key(KeyCode::Char('g')));
        assert_eq!(
            state.members_tab.table.filter().group.as_deref(),
            Some("SPD")
        );
        let _ = handle_key(&mut state, key(KeyCode::Char('g')));
        assert_eq!(state.members_tab.table.filter().group, None);
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut state = logged_in_state();
        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert!(matches!(state.popup, PopupState::QuitConfirm));

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert!(matches!(state.popup, PopupState::None));
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = logged_in_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert!(matches!(state.popup, PopupState::None));
    }

    #[test]
    fn service_keys_surface_as_actions() {
        let mut state = logged_in_state();
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('t'))),
            KeyAction::ToggleAppearance
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('o'))),
            KeyAction::ToggleSidebar
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('d'))),
            KeyAction::OpenSurvey
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('L'))),
            KeyAction::Logout
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('u'))),
            KeyAction::Refresh
        );
    }

    #[test]
    fn page_keys_only_act_on_the_members_tab() {
        let mut state = logged_in_state();
        let before = state.members_tab.table.page();
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.members_tab.table.page(), before);

        state.members_tab.open_vote(1);
        state.switch_tab(Tab::Members);
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.members_tab.table.page().current_page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Char('p')));
        assert_eq!(state.members_tab.table.page().current_page, 1);

        let _ = handle_key(&mut state, key(KeyCode::Char('z')));
        assert_eq!(state.members_tab.table.page().page_size, 25);
    }
}
