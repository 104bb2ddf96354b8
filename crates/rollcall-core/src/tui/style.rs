//! Color schemes and styles, one palette per appearance.

use ratatui::style::{Color, Modifier, Style};

use crate::store::Appearance;
use crate::view::common::RowStyleClass;

/// Palette of a single appearance.
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub selected_bg: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub accent: Color,
}

const LIGHT: Palette = Palette {
    bg: Color::White,
    fg: Color::Black,
    dim: Color::Gray,
    header_bg: Color::Blue,
    header_fg: Color::White,
    selected_bg: Color::LightBlue,
    positive: Color::Green,
    negative: Color::Red,
    warning: Color::Yellow,
    accent: Color::Blue,
};

const DARK: Palette = Palette {
    bg: Color::Reset,
    fg: Color::White,
    dim: Color::DarkGray,
    header_bg: Color::Blue,
    header_fg: Color::White,
    selected_bg: Color::DarkGray,
    positive: Color::Green,
    negative: Color::Red,
    warning: Color::Yellow,
    accent: Color::Cyan,
};

/// Palette for the persisted appearance preference.
pub fn palette(appearance: Appearance) -> &'static Palette {
    match appearance {
        Appearance::Light => &LIGHT,
        Appearance::Dark => &DARK,
    }
}

/// Pre-defined styles, parameterized by appearance.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn base(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.fg).bg(p.bg)
    }

    /// Header bar style.
    pub fn header(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default()
            .fg(p.header_fg)
            .bg(p.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header(appearance: Appearance) -> Style {
        Self::header(appearance)
    }

    /// Selected row style.
    pub fn selected(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default()
            .bg(p.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.dim)
    }

    /// Dimmed text style.
    pub fn dim(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.dim)
    }

    /// Warning/status message style.
    pub fn warning(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.warning)
    }

    /// Error message style.
    pub fn error(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.negative).add_modifier(Modifier::BOLD)
    }

    /// Filter/form input style.
    pub fn input(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.fg).add_modifier(Modifier::UNDERLINED)
    }

    /// Help text style.
    pub fn help(appearance: Appearance) -> Style {
        Self::dim(appearance)
    }

    /// Help key style (highlighted keys in help lines).
    pub fn help_key(appearance: Appearance) -> Style {
        let p = palette(appearance);
        Style::default().fg(p.fg).add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass, appearance: Appearance) -> Style {
        let p = palette(appearance);
        match class {
            RowStyleClass::Normal => Self::base(appearance),
            RowStyleClass::Active => Style::default().fg(p.positive),
            RowStyleClass::Critical => Style::default().fg(p.negative),
            RowStyleClass::Warning => Style::default().fg(p.warning),
            RowStyleClass::Dimmed => Style::default().fg(p.dim),
            RowStyleClass::Accent => Style::default().fg(p.accent),
        }
    }
}
