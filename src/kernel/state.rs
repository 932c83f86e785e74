use super::modal::ModalRegistry;
use super::order::OrdersState;
use super::snackbar::Snackbar;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub modals: ModalRegistry,
    pub orders: OrdersState,
    pub snackbar: Option<Snackbar>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
