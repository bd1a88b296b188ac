pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod schema;

pub use config::FixDefaultConfig;
pub use error::{FixDefaultError, Result};
pub use report::{RunContext, RunSummary};
pub use schema::{fix_defaults, fix_defaults_str};
