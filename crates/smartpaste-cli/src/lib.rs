//! Smart Paste CLI library.
//!
//! Configuration loading, input handling and command execution for the
//! `smartpaste` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
