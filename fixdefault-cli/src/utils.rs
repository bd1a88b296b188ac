/// # 日志系统使用说明
///
/// 1. **库代码只使用 `tracing` 宏**：`info!()`, `warn!()`, `error!()`, `debug!()`
/// 2. **应用入口控制日志配置**：在 `main.rs` 中调用 `setup_logging()`
/// 3. **生成的 SQL 只写入标准输出**：日志一律写入标准错误或日志文件
///
/// ## 日志配置选项
/// - `-v, --verbose`：启用详细日志模式（DEBUG 级别），默认只输出 WARN 及以上
/// - `RUST_LOG`：标准的 Rust 日志级别控制
/// - `FIXDEFAULT_LOG_FILE`：日志文件路径，设置后日志输出到文件而非终端
///
/// ```bash
/// mysql-fix-default -v scheme.sql > schemeUpdate.sql
/// FIXDEFAULT_LOG_FILE=fix.log mysql-fix-default scheme.sql
/// RUST_LOG=fixdefault_core::schema=debug mysql-fix-default scheme.sql
/// ```
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // 根据verbose参数和环境变量确定日志级别
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = std::env::var("FIXDEFAULT_LOG_FILE").ok().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| eprintln!("无法打开日志文件 {path}: {e}"))
            .ok()
    });

    if let Some(file) = log_file {
        // 输出到文件 - 使用详细格式便于调试
        fmt()
            .with_env_filter(env_filter)
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .init();
    } else {
        // 输出到标准错误 - 使用简洁格式
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .init();
    }
}
