//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `ui` so the core never depends on terminal crates.

pub mod crossterm;
pub mod terminal_guard;
