use super::*;
use crate::kernel::order::{OrderId, OrderStatus};
use crate::kernel::services::adapters::InMemoryMarket;
use crate::kernel::services::ports::MarketSettings;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn runtime_with(
    market: InMemoryMarket,
) -> (AsyncRuntime, std::sync::mpsc::Receiver<AppMessage>) {
    let (handle, rx) = ModalHandle::channel();
    let runtime = AsyncRuntime::new(handle, Arc::new(market)).unwrap();
    (runtime, rx)
}

#[test]
fn load_orders_reports_back_through_the_handle() {
    let (runtime, rx) = runtime_with(InMemoryMarket::seeded());
    runtime.run(Effect::LoadOrders);

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::OrdersLoaded(Ok(orders)) => assert_eq!(orders.len(), 8),
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn confirm_results_carry_their_seq() {
    let (runtime, rx) = runtime_with(InMemoryMarket::seeded());
    runtime.run(Effect::RunConfirm {
        seq: ModalSeq(7),
        action: ConfirmAction::AdvanceOrder {
            order_id: OrderId(1002),
            to: OrderStatus::Prepared,
        },
    });

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::ConfirmSettled { seq, result } => {
            assert_eq!(seq, ModalSeq(7));
            assert_eq!(result.unwrap().map(|o| o.status), Some(OrderStatus::Prepared));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn api_failures_are_reported_not_swallowed() {
    let market = InMemoryMarket::seeded().with_settings(&MarketSettings {
        latency_ms: 0,
        fail_every: 1,
    });
    let (runtime, rx) = runtime_with(market);
    runtime.run(Effect::RunConfirm {
        seq: ModalSeq(1),
        action: ConfirmAction::CancelOrder {
            order_id: OrderId(1001),
        },
    });

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::ConfirmSettled { result, .. } => {
            assert!(matches!(result, Err(ApiError::Unavailable(_))));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn acknowledge_needs_no_backend_call() {
    let (runtime, rx) = runtime_with(InMemoryMarket::new(Vec::new()));
    runtime.run(Effect::RunConfirm {
        seq: ModalSeq(3),
        action: ConfirmAction::Acknowledge,
    });
    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::ConfirmSettled { seq, result } => {
            assert_eq!(seq, ModalSeq(3));
            assert_eq!(result, Ok(None));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn results_after_teardown_are_dropped_quietly() {
    let (runtime, rx) = runtime_with(InMemoryMarket::seeded());
    drop(rx);
    runtime.run(Effect::LoadOrders);
    drop(runtime);
}

#[test]
fn messages_become_store_actions() {
    let now = std::time::Instant::now();
    let action = AppMessage::ConfirmSettled {
        seq: ModalSeq(2),
        result: Err(ApiError::NotFound(OrderId(5))),
    }
    .into_action(now);
    match action {
        crate::kernel::Action::ConfirmSettled { seq, result, .. } => {
            assert_eq!(seq, ModalSeq(2));
            assert_eq!(result, Err("order #5 not found".to_string()));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}
