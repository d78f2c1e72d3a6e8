//! Command implementations.

pub mod config;
pub mod extract;
pub mod load;
pub mod show;

pub use self::config::execute_config;
pub use self::extract::{execute_extract, run_extraction};
pub use self::load::{execute_load, verify_records};
pub use self::show::execute_show;
