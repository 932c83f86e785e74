//! Frontend-neutral input events and view results.
//!
//! Nothing in here depends on a terminal crate, so the kernel and the UI layer can be driven by
//! tests or by another frontend.

pub mod event;
pub mod view;

pub use event::InputEvent;
pub use view::EventResult;
