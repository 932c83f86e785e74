//! Orders as the storefront sees them.
//!
//! An order walks a fixed, linear progression from `registered` to `received`. Cancellation is
//! only possible before the parcel leaves the seller, and a cancelled order never moves again.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Registered,
    Paid,
    Prepared,
    Shipped,
    InTransit,
    Delivered,
    Received,
    Cancelled,
}

impl OrderStatus {
    /// The happy path, in order. `Cancelled` is not part of it.
    pub const PROGRESSION: [OrderStatus; 7] = [
        OrderStatus::Registered,
        OrderStatus::Paid,
        OrderStatus::Prepared,
        OrderStatus::Shipped,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Received,
    ];

    pub fn position(self) -> Option<usize> {
        Self::PROGRESSION.iter().position(|s| *s == self)
    }

    pub fn next(self) -> Option<OrderStatus> {
        let idx = self.position()?;
        Self::PROGRESSION.get(idx + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Received | OrderStatus::Cancelled)
    }

    pub fn can_cancel(self) -> bool {
        matches!(
            self,
            OrderStatus::Registered | OrderStatus::Paid | OrderStatus::Prepared
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Registered => "registered",
            OrderStatus::Paid => "paid",
            OrderStatus::Prepared => "prepared",
            OrderStatus::Shipped => "shipped",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Received => "received",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Registered => "Registered",
            OrderStatus::Paid => "Paid",
            OrderStatus::Prepared => "Prepared",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InTransit => "In transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Received => "Received",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub item: String,
    pub total_cents: u64,
    pub status: OrderStatus,
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, Default)]
pub struct OrdersState {
    pub items: Vec<Order>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl OrdersState {
    pub fn selected_order(&self) -> Option<&Order> {
        self.items.get(self.selected)
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.items.iter().find(|o| o.id == id)
    }

    pub fn replace(&mut self, items: Vec<Order>) -> bool {
        let changed = self.items != items || self.loading || self.error.is_some();
        self.items = items;
        self.loading = false;
        self.error = None;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        changed
    }

    /// Replaces the order with the same id. Unknown orders are appended.
    pub fn upsert(&mut self, order: Order) -> bool {
        match self.items.iter_mut().find(|o| o.id == order.id) {
            Some(slot) if *slot == order => false,
            Some(slot) => {
                *slot = order;
                true
            }
            None => {
                self.items.push(order);
                true
            }
        }
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let max = self.items.len() - 1;
        let prev = self.selected;
        self.selected = if delta < 0 {
            prev.saturating_sub(delta.unsigned_abs())
        } else {
            prev.saturating_add(delta as usize).min(max)
        };
        self.selected != prev
    }

    pub fn click_row(&mut self, row: usize) -> bool {
        if row >= self.items.len() {
            return false;
        }
        let prev = self.selected;
        self.selected = row;
        prev != row
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/order.rs"]
mod tests;
