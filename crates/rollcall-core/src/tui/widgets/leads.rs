//! Contact-requests widget for the Leads tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::leads::build_leads_view;

pub fn render_leads(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let appearance = state.appearance;
    let vm = build_leads_view(&state.leads, &state.leads_tab.search);
    state.leads_tab.resolve_selection(vm.rows.len());

    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    if vm.rows.is_empty() {
        let message = state
            .fetch_error
            .as_deref()
            .unwrap_or("Keine Anfragen gefunden.");
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let header = Row::new(
        vm.headers
            .iter()
            .map(|h| Span::styled(h.clone(), Styles::table_header(appearance))),
    )
    .style(Styles::table_header(appearance))
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s, appearance)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells)
                .style(Styles::from_class(vr.style, appearance))
                .height(1)
        })
        .collect();

    let mut constraints: Vec<Constraint> =
        vm.widths.iter().map(|&w| Constraint::Length(w)).collect();
    constraints.pop();
    constraints.push(Constraint::Fill(1));

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected(appearance));

    frame.render_stateful_widget(table, area, &mut state.leads_tab.ratatui_state);
}
