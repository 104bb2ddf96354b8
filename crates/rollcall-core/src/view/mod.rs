//! UI-agnostic view models.
//!
//! Builders derive presentation data from payloads plus the table/filter
//! configuration; the TUI maps them to ratatui widgets. Nothing in here
//! depends on a rendering framework.

pub mod common;
pub mod leads;
pub mod members;
pub mod votes;

pub use common::{Pager, RowStyleClass, TableViewModel, ViewCell, ViewRow};
