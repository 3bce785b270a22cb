//! Command-line interface

pub mod args;
pub mod commands;
mod report;

pub use args::{Cli, Commands};
