//! Phase0 template service: a liveness endpoint and the wiring to run it.

pub mod app;
pub mod config;
pub mod handlers;
pub mod server;
pub mod telemetry;

pub use app::router;
pub use config::Config;
