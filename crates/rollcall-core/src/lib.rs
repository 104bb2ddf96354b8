//! rollcall-core — shared library for the rollcall vote browser.
//!
//! Provides:
//! - `models` — portal payload records (votes, member votes, leads)
//! - `table` — member-vote table engine (filter, sort, pagination)
//! - `demographics` — survey field catalogue and answer storage format
//! - `store` — local key-value persistence (appearance, session, survey)
//! - `view` — UI-agnostic view models built from payloads + tab state
//! - `fmt` — shared formatting helpers (dates, percentages, truncation)
//!
//! With `client` feature (default):
//! - `client` — portal API client (login, votes, leads) and vote sources
//!
//! With `tui` feature (default):
//! - `tui` — terminal UI (ratatui/crossterm), state, input, widgets

pub mod demographics;
pub mod fmt;
pub mod models;
pub mod store;
pub mod table;
pub mod view;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "tui")]
pub mod tui;
