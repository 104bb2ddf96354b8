//! Quit confirmation dialog.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::store::Appearance;
use crate::tui::style::Styles;

use super::centered_rect;

pub fn render_quit_confirm(frame: &mut Frame, area: Rect, appearance: Appearance) {
    let popup = centered_rect(area, 36, 5);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "  rollcall beenden?",
            Styles::base(appearance),
        )),
        Line::from(vec![
            Span::styled("  Enter/q", Styles::help_key(appearance)),
            Span::styled(" Ja   ", Styles::help(appearance)),
            Span::styled("Esc/n", Styles::help_key(appearance)),
            Span::styled(" Nein", Styles::help(appearance)),
        ]),
    ];

    let block = Block::default()
        .title(" Beenden ")
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
