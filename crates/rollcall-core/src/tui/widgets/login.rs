//! Login form popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::{AppState, LoginField, PopupState};
use crate::tui::style::Styles;

use super::centered_rect;

pub fn render_login(frame: &mut Frame, area: Rect, state: &AppState) {
    let PopupState::Login(form) = &state.popup else {
        return;
    };
    let appearance = state.appearance;
    let popup = centered_rect(area, 48, 9);

    let field_line = |label: &str, value: &str, field: LoginField, mask: bool| {
        let focused = form.focus == field;
        let shown = if mask {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let cursor = if focused { "█" } else { "" };
        let style = if focused {
            Styles::input(appearance)
        } else {
            Styles::base(appearance)
        };
        Line::from(vec![
            Span::styled(format!(" {:<10}", label), Styles::dim(appearance)),
            Span::styled(format!("{}{}", shown, cursor), style),
        ])
    };

    let mut lines = vec![
        Line::default(),
        field_line("E-Mail", &form.email, LoginField::Email, false),
        field_line("Passwort", &form.password, LoginField::Password, true),
        Line::default(),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Styles::error(appearance),
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled(" Enter", Styles::help_key(appearance)),
        Span::styled(" Anmelden  ", Styles::help(appearance)),
        Span::styled("Tab", Styles::help_key(appearance)),
        Span::styled(" Feld wechseln", Styles::help(appearance)),
    ]));

    let block = Block::default()
        .title(" Anmeldung ")
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
