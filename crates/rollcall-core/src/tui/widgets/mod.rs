//! TUI widgets.

mod header;
mod help;
mod leads;
mod login;
mod members;
mod quit_confirm;
mod summary;
mod survey;
mod votes;

pub use header::render_header;
pub use help::render_help;
pub use leads::render_leads;
pub use login::render_login;
pub use members::render_members;
pub use quit_confirm::render_quit_confirm;
pub use summary::{render_summary, summary_height};
pub use survey::render_survey;
pub use votes::render_votes;

use ratatui::layout::{Constraint, Layout, Rect};

/// Centered popup area of at most `width` x `height` cells.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);
    horizontal[1]
}
