use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixDefaultError>;

#[derive(Error, Debug)]
pub enum FixDefaultError {
    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 列定义缺少 NULL / NOT NULL 标记，输入不是预期的 mysqldump 格式，整个运行必须中止
    #[error("[{table}, {line_nr}] Missing NULL: {tokens}")]
    MissingNull {
        table: String,
        line_nr: usize,
        tokens: String,
    },

    #[error("配置文件未找到: {0}")]
    ConfigNotFound(String),
}

impl FixDefaultError {
    /// 是否为必须中止整个运行的致命错误
    pub fn is_fatal_schema_error(&self) -> bool {
        matches!(self, Self::MissingNull { .. })
    }
}
