//! Service ports: traits + data contracts.

pub mod market;
pub mod settings;

pub use market::{ApiError, MarketApi};
pub use settings::{MarketSettings, ModalSettings, Settings, ThemeSettings};
