use super::processor::TableProcessor;
use super::scanner::SchemaScanner;
use crate::config::FixDefaultConfig;
use crate::error::Result;
use crate::report::{RunContext, RunSummary};
use std::io::{BufRead, Write};
use tracing::info;

/// 读取表结构转储，为缺少 DEFAULT 的列生成 ALTER TABLE 语句
///
/// 语句在每个表定义结束时按源文件顺序写入 `out`，诊断信息写入 `diag`。
/// 遇到缺少 NULL 标记的列时立即返回错误，之后的表不再处理。
pub fn fix_defaults<R, W, E>(
    input: R,
    config: &FixDefaultConfig,
    out: W,
    diag: E,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let processor = TableProcessor::new(config);
    let mut scanner = SchemaScanner::new();
    let mut ctx = RunContext::new(out, diag);

    for line in input.lines() {
        let line = line?;
        if let Some(block) = scanner.feed(&line) {
            processor.process_table(&block, &mut ctx)?;
        }
    }

    info!(
        "共读取 {} 行，处理 {} 个表",
        scanner.line_nr(),
        ctx.summary().tables
    );
    ctx.finish()
}

/// 处理内存中的表结构文本
pub fn fix_defaults_str<W: Write, E: Write>(
    dump: &str,
    config: &FixDefaultConfig,
    out: W,
    diag: E,
) -> Result<RunSummary> {
    fix_defaults(dump.as_bytes(), config, out, diag)
}
