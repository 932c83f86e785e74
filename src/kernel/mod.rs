//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod error;
pub mod handle;
pub mod modal;
pub mod order;
pub mod services;
pub mod snackbar;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use error::KernelError;
pub use handle::ModalHandle;
pub use modal::{
    ConfirmAction, ConfirmOptions, DialogLocal, ModalEntry, ModalKind, ModalName, ModalRegistry,
    ModalSeq, NoticeOptions, OrderStatusOptions,
};
pub use order::{Order, OrderId, OrderStatus, OrdersState};
pub use snackbar::{Snackbar, SnackbarKind};
pub use state::AppState;
pub use store::{DispatchResult, Store};
