mod chain;
#[allow(clippy::module_inception)]
mod config;
mod env;
mod workspace_settings;

pub use chain::*;
pub use config::*;
pub use env::*;
pub use workspace_settings::*;
