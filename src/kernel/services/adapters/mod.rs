//! Service adapters: runtime specific implementations.

pub mod memory;
pub mod runtime;
pub mod settings;

pub use memory::InMemoryMarket;
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_log_dir, ensure_settings_file, ensure_settings_file_at, get_settings_path,
    load_settings_from, SettingsError,
};
