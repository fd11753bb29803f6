pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::greeter::Greeter;
