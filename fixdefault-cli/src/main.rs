use clap::Parser;
use fixdefault_cli::{Cli, CliApp, exit_code, is_schema_abort, project_info, setup_logging};
use tracing::{debug, error};

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    let Some(file) = cli.input_file() else {
        println!("{}", project_info::usage());
        std::process::exit(exit_code::FAILURE);
    };

    let app = match CliApp::new(cli.config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 初始化失败: {:#}", e);
            std::process::exit(exit_code::FAILURE);
        }
    };

    if let Err(e) = app.run(file) {
        if is_schema_abort(&e) {
            // 诊断信息已写入标准错误
            debug!("❌ 表结构不符合预期，已中止: {:#}", e);
            std::process::exit(exit_code::SCHEMA_ABORT);
        }
        error!("❌ 操作失败: {:#}", e);
        std::process::exit(exit_code::FAILURE);
    }
}
