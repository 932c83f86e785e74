use crate::kernel::order::{Order, OrderId, OrderStatus};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("order {0} not found")]
    NotFound(OrderId),
    #[error("order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
    #[error("order {id} is already {status} and cannot be cancelled")]
    NotCancellable { id: OrderId, status: OrderStatus },
    #[error("marketplace unavailable: {0}")]
    Unavailable(String),
}

/// The marketplace backend as seen by the storefront.
///
/// Calls are blocking; the async runtime runs them on its blocking pool.
pub trait MarketApi: Send + Sync + 'static {
    fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Moves `id` to `to`, which must be the next step of its current status.
    fn advance_order(&self, id: OrderId, to: OrderStatus) -> Result<Order, ApiError>;

    fn cancel_order(&self, id: OrderId) -> Result<Order, ApiError>;
}
