//! Terminal integration (crossterm + ratatui).
//!
//! Nothing outside this module and `ui::backend::terminal` names a terminal crate, so the dock
//! and the UI core can be driven headlessly in tests.

pub mod crossterm;
pub mod terminal_guard;
