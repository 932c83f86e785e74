//! Views: project kernel state into paint commands and hit-test nodes.
//!
//! - `orders`: the order list behind the modals
//! - `modal`: the modal stack renderer, its dialog table and the backdrop dismissal policy

pub mod modal;
pub mod orders;

pub use modal::{DialogTable, DismissPolicy, ModalRenderer};
pub use orders::OrdersView;
