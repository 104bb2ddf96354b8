//! Member-vote table widget for the Members tab.
//! Thin TUI wrapper over [`crate::view::members::build_member_votes_view`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::common::Pager;
use crate::view::members::build_member_votes_view;

pub fn render_members(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let appearance = state.appearance;
    let Some(vote) = state.votes.iter().find(|v| Some(v.id) == state.members_tab.vote_id) else {
        let block = Block::default()
            .title(" Abstimmungsverhalten ")
            .borders(Borders::ALL)
            .style(Styles::base(appearance));
        let message = state
            .fetch_error
            .as_deref()
            .unwrap_or("Keine Abstimmung ausgewählt — Enter auf der Abstimmungsliste.");
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    };

    let vm = build_member_votes_view(vote, &mut state.members_tab.table);
    state.members_tab.resolve_selection(vm.rows.len());

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    // Header with sort indicator
    let headers: Vec<Span> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = if Some(i) == vm.sort_column {
                if vm.sort_ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            Span::styled(format!("{}{}", h, indicator), Styles::table_header(appearance))
        })
        .collect();
    let header = Row::new(headers)
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
    constraints.push(Constraint::Fill(1));

    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    if vm.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("Keine Ergebnisse gefunden.").block(block),
            chunks[0],
        );
    } else {
        let table = Table::new(rows, constraints)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Styles::selected(appearance));
        frame.render_stateful_widget(table, chunks[0], &mut state.members_tab.ratatui_state);
    }

    if let Some(pager) = &vm.pager {
        frame.render_widget(
            Paragraph::new(pager_line(pager, state)).style(Styles::base(appearance)),
            chunks[1],
        );
    }
}

/// `‹ 1 [2] 3 ›  Seite 2/3 · 23 Stimmen · 10 pro Seite (n/p z)`.
fn pager_line<'a>(pager: &Pager, state: &AppState) -> Line<'a> {
    let appearance = state.appearance;
    let mut spans: Vec<Span> = Vec::new();

    let prev_style = if pager.current_page > 1 {
        Styles::base(appearance)
    } else {
        Styles::dim(appearance)
    };
    spans.push(Span::styled(" ‹ ", prev_style));

    for page in &pager.window {
        if *page == pager.current_page {
            spans.push(Span::styled(
                format!("[{}] ", page),
                Styles::tab_active(appearance),
            ));
        } else {
            spans.push(Span::styled(format!("{} ", page), Styles::dim(appearance)));
        }
    }

    let next_style = if pager.current_page < pager.total_pages {
        Styles::base(appearance)
    } else {
        Styles::dim(appearance)
    };
    spans.push(Span::styled("› ", next_style));

    spans.push(Span::styled(
        format!(
            " Seite {}/{} · {} Stimmen · {} pro Seite",
            pager.current_page, pager.total_pages, pager.total_items, pager.page_size
        ),
        Styles::dim(appearance),
    ));

    Line::from(spans)
}
