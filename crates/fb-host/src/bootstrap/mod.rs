pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_seed};
pub use run::run_bridge;
pub use wiring::{wire, Wired, WiringError};
