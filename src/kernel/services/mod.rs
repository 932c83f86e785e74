//! Services layer (ports + adapters).
//!
//! - `ports`: contracts and data types the kernel talks to.
//! - `adapters`: runtime specific implementations (async execution, settings files, the
//!   in-memory market).

pub mod adapters;
pub mod ports;
