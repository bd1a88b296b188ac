/// 项目元数据（自动从 Cargo.toml 同步）
pub mod metadata {
    /// 可执行文件名
    pub const BIN_NAME: &str = "mysql-fix-default";

    /// 项目描述（自动从 Cargo.toml 同步）
    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    /// 项目作者（自动从 Cargo.toml 同步）
    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    pub mod display {
        /// 项目详细描述（比 Cargo.toml 中的描述更详细）
        pub const DESCRIPTION_LONG: &str = "读取 mysqldump --no-data 生成的表结构文件，为所有没有 DEFAULT 的列按类型生成 ALTER TABLE ... CHANGE 语句。\n\
            enum/set 以第一个值作为缺省值；第一个值不是 '' 的语句列在输出末尾，更新前需要人工确认。\n\
            用法示例: mysql-fix-default scheme.sql > schemeUpdate.sql";
    }
}

/// 版本信息
pub mod version_info {
    /// CLI 版本（自动从 Cargo.toml 同步）
    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// 用法提示
pub fn usage() -> String {
    format!("Usage: {} <file.sql>", metadata::BIN_NAME)
}
