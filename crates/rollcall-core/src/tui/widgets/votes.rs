//! Votes-list widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::fmt::format_date;
use crate::models::VoteStatus;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::votes::build_votes_view;

pub fn render_votes(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let appearance = state.appearance;
    let title = if state.votes_tab.query.is_empty() {
        format!(
            " Abstimmungen [{}] ",
            state.votes_tab.status.label()
        )
    } else {
        format!(
            " Abstimmungen [{}] (Filter: {}) ",
            state.votes_tab.status.label(),
            state.votes_tab.query
        )
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    if state.votes.is_empty() {
        let message = state
            .fetch_error
            .as_deref()
            .unwrap_or("Keine Abstimmungen gefunden.");
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let cards = build_votes_view(&state.votes, &state.votes_tab.query, state.votes_tab.status);
    state.votes_tab.resolve_selection(cards.len());

    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("Keine Abstimmungen gefunden.").block(block),
            area,
        );
        return;
    }

    let header = Row::new(
        ["DATUM", "STATUS", "KATEGORIE", "TITEL", "ERGEBNIS"]
            .iter()
            .map(|h| Span::styled(*h, Styles::table_header(appearance))),
    )
    .style(Styles::table_header(appearance))
    .height(1);

    let rows: Vec<Row> = cards
        .iter()
        .map(|card| {
            let date = if card.starts_date_group {
                format_date(card.date)
            } else {
                String::new()
            };
            let status_style = match card.status {
                VoteStatus::Upcoming => Styles::warning(appearance),
                VoteStatus::Completed => Styles::dim(appearance),
            };
            let result = if card.status == VoteStatus::Completed {
                format!(
                    "Ja {}% · Nein {}%",
                    card.member_tally.yes_pct(),
                    card.member_tally.no_pct()
                )
            } else {
                "—".to_string()
            };
            Row::new(vec![
                Span::styled(date, Styles::dim(appearance)),
                Span::styled(card.status.label().to_string(), status_style),
                Span::raw(card.category.clone().unwrap_or_default()),
                Span::raw(card.title.clone()),
                Span::raw(result),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(17),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Fill(1),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1)
    .row_highlight_style(Styles::selected(appearance));

    frame.render_stateful_widget(table, area, &mut state.votes_tab.ratatui_state);
}
