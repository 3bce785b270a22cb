//! Terminal output for prime tables and config messages
//!
//! Uses `cliclack` styled lines in an interactive terminal and falls back
//! to plain bracketed prefixes in CI or when output is piped.

mod context;
mod output;

pub use context::UiContext;
pub use output::{
    config_kept, config_written, heading, summary, table_header, table_row, unknown_config_key,
    verdict, Column,
};
