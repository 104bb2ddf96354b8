//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_header, render_help, render_leads, render_login, render_members, render_quit_confirm,
    render_summary, render_survey, render_votes, summary_height,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let summary = summary_height(state);
    let chunks = Layout::vertical([
        Constraint::Length(1),       // Header
        Constraint::Length(summary), // Summary panel (collapsible)
        Constraint::Min(5),          // Content area
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    if summary > 0 {
        render_summary(frame, chunks[1], state);
    }
    render_content(frame, chunks[2], state);

    // Popups overlay everything.
    match &state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => {
            let scroll = *scroll;
            render_help(frame, area, state, scroll);
        }
        PopupState::QuitConfirm => render_quit_confirm(frame, area, state.appearance),
        PopupState::Login(_) => render_login(frame, area, state),
        PopupState::Survey(_) => render_survey(frame, area, state),
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.current_tab {
        Tab::Votes => render_votes(frame, area, state),
        Tab::Members => render_members(frame, area, state),
        Tab::Leads => render_leads(frame, area, state),
    }
}
