use super::message::AppMessage;
use crate::kernel::handle::ModalHandle;
use crate::kernel::modal::{ConfirmAction, ModalSeq};
use crate::kernel::order::Order;
use crate::kernel::services::ports::{ApiError, MarketApi};
use crate::kernel::Effect;
use std::io;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    handle: ModalHandle,
    api: Arc<dyn MarketApi>,
}

impl AsyncRuntime {
    pub fn new(handle: ModalHandle, api: Arc<dyn MarketApi>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            handle,
            api,
        })
    }

    pub fn modal_handle(&self) -> &ModalHandle {
        &self.handle
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::LoadOrders => self.load_orders(),
            Effect::RunConfirm { seq, action } => self.run_confirm(seq, action),
        }
    }

    fn load_orders(&self) {
        let api = self.api.clone();
        let handle = self.handle.clone();
        self.runtime.spawn(async move {
            let result = blocking(move || api.list_orders()).await;
            if let Err(err) = handle.send(AppMessage::OrdersLoaded(result)) {
                tracing::warn!(error = %err, "orders loaded after shutdown");
            }
        });
    }

    fn run_confirm(&self, seq: ModalSeq, action: ConfirmAction) {
        let api = self.api.clone();
        let handle = self.handle.clone();
        self.runtime.spawn(async move {
            let result = blocking(move || execute_confirm(api.as_ref(), action)).await;
            if let Err(err) = handle.send(AppMessage::ConfirmSettled { seq, result }) {
                tracing::warn!(seq = seq.0, error = %err, "confirm result after shutdown");
            }
        });
    }
}

fn execute_confirm(api: &dyn MarketApi, action: ConfirmAction) -> Result<Option<Order>, ApiError> {
    match action {
        ConfirmAction::Acknowledge => Ok(None),
        ConfirmAction::AdvanceOrder { order_id, to } => api.advance_order(order_id, to).map(Some),
        ConfirmAction::CancelOrder { order_id } => api.cancel_order(order_id).map(Some),
    }
}

async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(join_err) => {
            tracing::error!(error = %join_err, "market call panicked");
            Err(ApiError::Unavailable(join_err.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/runtime.rs"]
mod tests;
