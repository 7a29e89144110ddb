// Adapters layer: concrete implementations for external systems (upstream API, hosting runtimes).

pub mod gateway;
#[cfg(feature = "cli")]
pub mod server;
pub mod swapi;
