//! UI layer (deep wrapper over `ratatui`).
//!
//! Views paint into a backend-neutral `Painter` and register interactive regions in a
//! `UiTree`. Only `backend::terminal` knows about `ratatui`.

pub mod backend;
pub mod core;
