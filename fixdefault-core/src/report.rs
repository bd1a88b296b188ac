use crate::constants::output;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// 一次运行的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tables: usize,
    pub inline_statements: usize,
    pub deferred_statements: usize,
    pub unhandled_columns: usize,
    /// 至少成功注入过一次 DEFAULT
    pub dirty: bool,
}

/// 运行上下文：输出流、诊断流以及整个运行期间累积的状态
pub struct RunContext<W: Write, E: Write> {
    out: W,
    diag: E,
    review: String,
    summary: RunSummary,
}

impl<W: Write, E: Write> RunContext<W, E> {
    pub fn new(out: W, diag: E) -> Self {
        Self {
            out,
            diag,
            review: String::new(),
            summary: RunSummary::default(),
        }
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub(crate) fn table_done(&mut self) {
        self.summary.tables += 1;
    }

    /// 立即输出一条语句
    pub fn emit_statement(&mut self, statement: &str) -> Result<()> {
        debug!("生成语句: {}", statement);
        writeln!(self.out, "{statement}")?;
        self.summary.inline_statements += 1;
        self.summary.dirty = true;
        Ok(())
    }

    /// enum/set 的第一个值不是 '' 时，语句留到最后供人工确认
    pub fn defer_review(&mut self, line: &str, statement: &str) {
        debug!("语句需要人工确认: {}", statement);
        self.review.push_str(output::REVIEW_PREFIX);
        self.review.push_str(line);
        self.review.push_str(statement);
        self.review.push('\n');
        self.summary.deferred_statements += 1;
        self.summary.dirty = true;
    }

    /// 无法识别的列类型，记录后继续
    pub fn report_unhandled(&mut self, table: &str, line_nr: usize, data_type: &str) -> Result<()> {
        debug!("表 {} 第 {} 行的列类型无法处理: {}", table, line_nr, data_type);
        writeln!(self.diag, "[{table}, {line_nr}] Type unhandled: {data_type}")?;
        self.summary.unhandled_columns += 1;
        Ok(())
    }

    /// enum/set 声明中找不到第一个值，记录后继续
    pub fn report_unreadable_enum(
        &mut self,
        table: &str,
        line_nr: usize,
        data_type: &str,
    ) -> Result<()> {
        debug!("表 {} 第 {} 行无法读取 enum/set 的值: {}", table, line_nr, data_type);
        writeln!(
            self.diag,
            "[{table}, {line_nr}] Enum/set value unreadable: {data_type}"
        )?;
        self.summary.unhandled_columns += 1;
        Ok(())
    }

    /// 原样写入一行诊断信息
    pub fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.diag, "{message}")?;
        self.diag.flush()?;
        Ok(())
    }

    /// 输出待确认语句和结束行
    pub fn finish(mut self) -> Result<RunSummary> {
        if !self.review.is_empty() {
            self.out.write_all(output::REVIEW_BANNER.as_bytes())?;
            self.out.write_all(self.review.as_bytes())?;
        }

        // 结束行在成功注入过 DEFAULT 时输出，与文案字面意思相反
        if self.summary.dirty {
            self.out.write_all(output::CLOSING_LINE.as_bytes())?;
        }

        self.out.flush()?;
        self.diag.flush()?;
        Ok(self.summary)
    }
}
