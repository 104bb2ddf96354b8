//! Collapsible summary panel under the header.
//!
//! Shows payload totals on the votes/leads tabs and the open ballot's
//! result bars on the members tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::fmt::{count_with_pct, format_date};
use crate::models::{VoteStatus, VoteTally};
use crate::tui::state::{AppState, Tab};
use crate::tui::style::{Styles, palette};

/// Height of the summary area; 0 when collapsed.
pub fn summary_height(state: &AppState) -> u16 {
    if state.sidebar_open { 4 } else { 0 }
}

/// Renders the summary panel. Caller skips the call when collapsed.
pub fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let appearance = state.appearance;
    let lines = match state.current_tab {
        Tab::Members => match state.current_vote() {
            Some(vote) => {
                let tally = vote.member_tally();
                vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{} — {}", format_date(vote.vote_date), vote.title),
                            Styles::base(appearance),
                        ),
                    ]),
                    tally_line("Parlament ", &tally, state),
                    tally_line("Nutzer    ", &vote.user_tally(), state),
                ]
            }
            None => vec![Line::from(Span::styled(
                "Keine Abstimmung ausgewählt — Enter auf der Abstimmungsliste",
                Styles::dim(appearance),
            ))],
        },
        Tab::Votes => {
            let completed = state
                .votes
                .iter()
                .filter(|v| v.status == VoteStatus::Completed)
                .count();
            let upcoming = state.votes.len() - completed;
            vec![
                Line::from(Span::styled(
                    format!("{} Abstimmungen geladen", state.votes.len()),
                    Styles::base(appearance),
                )),
                Line::from(Span::styled(
                    format!("{} abgeschlossen · {} anstehend", completed, upcoming),
                    Styles::dim(appearance),
                )),
            ]
        }
        Tab::Leads => vec![Line::from(Span::styled(
            format!("{} Kontaktanfragen geladen", state.leads.len()),
            Styles::base(appearance),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).style(Styles::base(appearance)),
        area,
    );
}

/// One labeled result bar: `label ████▒▒░ Ja 12 (50%) Nein 8 (33%) ...`.
fn tally_line<'a>(label: &'a str, tally: &VoteTally, state: &AppState) -> Line<'a> {
    let appearance = state.appearance;
    let p = palette(appearance);
    const BAR_WIDTH: u32 = 24;

    if tally.total == 0 {
        return Line::from(vec![
            Span::styled(label, Styles::dim(appearance)),
            Span::styled(" keine Stimmen", Styles::dim(appearance)),
        ]);
    }

    let yes_cells = (tally.yes * BAR_WIDTH / tally.total) as usize;
    let no_cells = (tally.no * BAR_WIDTH / tally.total) as usize;
    let rest = BAR_WIDTH as usize - yes_cells - no_cells;

    Line::from(vec![
        Span::styled(label, Styles::dim(appearance)),
        Span::styled("█".repeat(yes_cells), ratatui::style::Style::default().fg(p.positive)),
        Span::styled("█".repeat(no_cells), ratatui::style::Style::default().fg(p.negative)),
        Span::styled("█".repeat(rest), ratatui::style::Style::default().fg(p.dim)),
        Span::styled(
            format!(
                "  Ja {}  Nein {}  Enthaltung {}",
                count_with_pct(tally.yes, tally.yes_pct()),
                count_with_pct(tally.no, tally.no_pct()),
                count_with_pct(tally.abstention, tally.abstention_pct()),
            ),
            Styles::base(appearance),
        ),
    ])
}
