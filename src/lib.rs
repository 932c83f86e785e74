//! storefront: terminal client for a marketplace order desk, built around a modal stack.
//!
//! Modules:
//! - core: frontend-neutral input events
//! - kernel: headless state/action/effect store, modal registry, market port and adapters
//! - ui: geometry, paint commands, hit-test tree and rendering backends
//! - views: order list and the modal stack renderer
//! - app: input routing, effect execution and frame painting
//! - tui: terminal setup and crossterm event conversion

pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;
