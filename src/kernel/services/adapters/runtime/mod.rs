//! Async runtime adapter: executes effects and sends results back to the UI loop.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
