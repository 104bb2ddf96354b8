//! Demographic survey popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::demographics::survey_fields;
use crate::tui::state::{AppState, PopupState};
use crate::tui::style::Styles;

use super::centered_rect;

pub fn render_survey(frame: &mut Frame, area: Rect, state: &AppState) {
    let PopupState::Survey(form) = &state.popup else {
        return;
    };
    let appearance = state.appearance;
    let height = survey_fields().len() as u16 + 6;
    let popup = centered_rect(area, 64, height);

    let mut lines = vec![
        Line::from(Span::styled(
            " Freiwillige Angaben — lokal gespeichert, nie übertragen",
            Styles::dim(appearance),
        )),
        Line::default(),
    ];
    for (idx, field) in survey_fields().iter().enumerate() {
        let focused = idx == form.field_idx;
        let marker = if focused { "›" } else { " " };
        let value_style = if focused {
            Styles::input(appearance)
        } else {
            Styles::base(appearance)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {:<22}", marker, field.label),
                if focused {
                    Styles::help_key(appearance)
                } else {
                    Styles::dim(appearance)
                },
            ),
            Span::styled(form.answer_label(idx), value_style),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" ←/→", Styles::help_key(appearance)),
        Span::styled(" Antwort  ", Styles::help(appearance)),
        Span::styled("↑/↓", Styles::help_key(appearance)),
        Span::styled(" Frage  ", Styles::help(appearance)),
        Span::styled("Enter", Styles::help_key(appearance)),
        Span::styled(" Speichern  ", Styles::help(appearance)),
        Span::styled("Esc", Styles::help_key(appearance)),
        Span::styled(" Verwerfen", Styles::help(appearance)),
    ]));

    let block = Block::default()
        .title(" Demografie ")
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
