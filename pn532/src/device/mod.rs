// pn532/src/device/mod.rs

//! Session layer: the command dispatcher and the `Device` handle built on it.

/// Fluent construction of a session
pub mod builder;
pub mod config;
pub mod dispatcher;
/// The type-state `Device` handle
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::SessionConfig;
pub use dispatcher::Dispatcher;
pub use handle::{Device, Initialized, Uninitialized};
