// 私有模块声明
mod app;
mod cli;
pub mod project_info;
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use app::{CliApp, exit_code, is_schema_abort};
pub use cli::Cli;
pub use utils::setup_logging;
