//! Header widget showing the app name, tabs, and filter/status area.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let appearance = state.appearance;
    let chunks = Layout::horizontal([
        Constraint::Length(10), // App name
        Constraint::Min(30),    // Tabs
        Constraint::Length(24), // User
        Constraint::Length(40), // Filter input / status
    ])
    .split(area);

    let name = Paragraph::new(" rollcall ").style(Styles::header(appearance));
    frame.render_widget(name, chunks[0]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active(appearance)
            } else {
                Styles::tab_inactive(appearance)
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![
                Span::styled(num, Styles::dim(appearance)),
                Span::styled(name, style),
            ]
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header(appearance));
    frame.render_widget(tabs_widget, chunks[1]);

    // User
    let user = state
        .session
        .as_ref()
        .and_then(|s| s.user_name.as_deref())
        .unwrap_or("");
    let user_widget = Paragraph::new(format!("{} ", user))
        .style(Styles::header(appearance))
        .right_aligned();
    frame.render_widget(user_widget, chunks[2]);

    // Filter input, status message, or the active filter
    let (text, style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::warning(appearance))
    } else if state.input_mode == InputMode::Filter {
        (
            format!("Filter: {}█", state.filter_input),
            Styles::input(appearance),
        )
    } else {
        let filter = state.current_filter();
        let text = if filter.is_empty() {
            String::new()
        } else {
            format!("/{}", filter)
        };
        (text, Styles::header(appearance))
    };
    frame.render_widget(Paragraph::new(text).style(style), chunks[3]);
}
