//! Help popup listing the keybindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / 1-3", "Reiter wechseln"),
    ("↑/↓ j/k", "Zeile wählen"),
    ("Enter", "Abstimmung öffnen (Abstimmungsliste)"),
    ("/", "Filter eingeben (live)"),
    ("s / r", "Sortierspalte / -richtung (Stimmen)"),
    ("N G V B", "Direkt sortieren: Name, Fraktion, Abstimmung, Land"),
    ("n / p  ←/→", "Seite vor / zurück (Stimmen)"),
    ("z", "Seitengröße 10/25/50/100 (Stimmen)"),
    ("f / g / b", "Filter: Stimme / Fraktion / Bundesland (Stimmen)"),
    ("x", "Filter zurücksetzen (Stimmen)"),
    ("c", "Status-Filter (Abstimmungsliste)"),
    ("u", "Neu laden"),
    ("t", "Hell/Dunkel umschalten"),
    ("o", "Zusammenfassung ein/aus"),
    ("d", "Demografie-Umfrage"),
    ("L", "Abmelden"),
    ("?", "Diese Hilfe"),
    ("q", "Beenden"),
];

pub fn render_help(frame: &mut Frame, area: Rect, state: &AppState, scroll: usize) {
    let appearance = state.appearance;
    let popup = centered_rect(
        area,
        64,
        (BINDINGS.len() as u16).min(area.height.saturating_sub(2)) + 2,
    );

    let lines: Vec<Line> = BINDINGS
        .iter()
        .skip(scroll)
        .map(|(keys, text)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", keys), Styles::help_key(appearance)),
                Span::styled(*text, Styles::help(appearance)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Hilfe ")
        .borders(Borders::ALL)
        .style(Styles::base(appearance));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
