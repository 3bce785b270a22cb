//! CLI command implementations

pub mod check;
pub mod config;
pub mod first;
pub mod next;
pub mod nth;
pub mod upto;

pub use check::execute as check;
pub use config::execute as config;
pub use first::execute as first;
pub use next::execute as next;
pub use nth::execute as nth;
pub use upto::execute as upto;
