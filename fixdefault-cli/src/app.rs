use anyhow::{Context, Result};
use fixdefault_core::{FixDefaultConfig, FixDefaultError, RunSummary, fix_defaults};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// 进程退出码
pub mod exit_code {
    /// 参数缺失或运行失败
    pub const FAILURE: i32 = 1;
    /// 表结构中存在缺少 NULL 标记的列，运行已中止
    pub const SCHEMA_ABORT: i32 = 2;
}

pub struct CliApp {
    pub config: FixDefaultConfig,
}

impl CliApp {
    /// 加载配置：指定了路径时文件必须存在，否则在当前目录查找
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => FixDefaultConfig::load_from_file(path)
                .with_context(|| format!("加载配置文件 {} 失败", path.display()))?,
            None => FixDefaultConfig::find_and_load_config().context("加载配置文件失败")?,
        };

        Ok(Self { config })
    }

    /// 处理表结构文件，语句写入标准输出，诊断信息写入标准错误
    pub fn run(&self, file: &Path) -> Result<RunSummary> {
        info!("读取表结构文件: {}", file.display());
        let input = File::open(file)
            .map(BufReader::new)
            .with_context(|| format!("无法打开文件 {}", file.display()))?;

        let stdout = std::io::stdout();
        let out = BufWriter::new(stdout.lock());
        let diag = std::io::stderr();

        let summary = fix_defaults(input, &self.config, out, diag)
            .with_context(|| format!("处理文件 {} 失败", file.display()))?;

        info!(
            "处理完成: {} 个表, {} 条语句, {} 条待确认, {} 列类型无法处理",
            summary.tables,
            summary.inline_statements,
            summary.deferred_statements,
            summary.unhandled_columns
        );
        Ok(summary)
    }
}

/// 沿错误链查找是否为表结构不符合预期导致的中止
pub fn is_schema_abort(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<FixDefaultError>()
            .is_some_and(FixDefaultError::is_fatal_schema_error)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_abort_detection() {
        let err = anyhow::Error::new(FixDefaultError::MissingNull {
            table: "`t`".into(),
            line_nr: 3,
            tokens: "`b` int(11),".into(),
        })
        .context("处理文件 x.sql 失败");
        assert!(is_schema_abort(&err));

        let err = anyhow::Error::new(FixDefaultError::ConfigNotFound("x.toml".into()))
            .context("外层");
        assert!(!is_schema_abort(&err));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = CliApp::new(Some(missing.as_path()));
        assert!(result.is_err());
    }
}
