pub mod cli;
pub mod config;

pub use cli::{Cli, Command};
pub use config::{ApiSettings, ChatSettings, Environment, LoggingSettings, Settings};
