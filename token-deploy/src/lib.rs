pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod contract;
pub mod deployment;
pub mod error;
pub mod execute;
pub mod query;
pub mod token;
pub mod utils;

pub use strum;
pub use strum_macros;
