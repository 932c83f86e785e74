//! In-memory marketplace used by the binary and by tests.

use crate::kernel::order::{Order, OrderId, OrderStatus};
use crate::kernel::services::ports::market::{ApiError, MarketApi};
use crate::kernel::services::ports::settings::MarketSettings;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct InMemoryMarket {
    orders: Mutex<Vec<Order>>,
    latency: Duration,
    fail_every: u32,
    mutations: AtomicU32,
}

impl InMemoryMarket {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
            ..Self::default()
        }
    }

    pub fn with_settings(mut self, settings: &MarketSettings) -> Self {
        self.latency = Duration::from_millis(settings.latency_ms);
        self.fail_every = settings.fail_every;
        self
    }

    pub fn seeded() -> Self {
        let order = |id, customer: &str, item: &str, total_cents, status| Order {
            id: OrderId(id),
            customer: customer.to_string(),
            item: item.to_string(),
            total_cents,
            status,
        };
        Self::new(vec![
            order(1001, "Ana Souza", "Ceramic mug set", 3_450, OrderStatus::Registered),
            order(1002, "Kenji Mori", "Walnut desk tray", 5_900, OrderStatus::Paid),
            order(1003, "Lea Brandt", "Linen tote bag", 2_200, OrderStatus::Prepared),
            order(1004, "Omar Haddad", "Brass reading lamp", 12_900, OrderStatus::Shipped),
            order(1005, "Priya Nair", "Wool throw blanket", 8_400, OrderStatus::InTransit),
            order(1006, "Tomas Novak", "Cast iron skillet", 4_600, OrderStatus::Delivered),
            order(1007, "Mia Jensen", "Stoneware planter", 3_100, OrderStatus::Received),
            order(1008, "Luis Ortega", "Leather notebook", 2_750, OrderStatus::Cancelled),
        ])
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn simulate(&self, mutating: bool) -> Result<(), ApiError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if mutating && self.fail_every > 0 {
            let n = self.mutations.fetch_add(1, Ordering::Relaxed) + 1;
            if n % self.fail_every == 0 {
                return Err(ApiError::Unavailable("simulated outage".to_string()));
            }
        }
        Ok(())
    }
}

impl MarketApi for InMemoryMarket {
    fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.simulate(false)?;
        Ok(self.lock().clone())
    }

    fn advance_order(&self, id: OrderId, to: OrderStatus) -> Result<Order, ApiError> {
        self.simulate(true)?;
        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(ApiError::NotFound(id))?;
        if order.status.next() != Some(to) {
            return Err(ApiError::InvalidTransition {
                id,
                from: order.status,
                to,
            });
        }
        order.status = to;
        tracing::info!(order = %id, status = %to, "order advanced");
        Ok(order.clone())
    }

    fn cancel_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.simulate(true)?;
        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(ApiError::NotFound(id))?;
        if !order.status.can_cancel() {
            return Err(ApiError::NotCancellable {
                id,
                status: order.status,
            });
        }
        order.status = OrderStatus::Cancelled;
        tracing::info!(order = %id, "order cancelled");
        Ok(order.clone())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/memory.rs"]
mod tests;
