use super::enum_set::first_enum_value;
use super::rules::{DefaultRule, DefaultRules};
use super::splicer::{SpliceOutcome, inject_default, terminate_statement};
use super::types::{ColumnDef, TableBlock};
use crate::config::FixDefaultConfig;
use crate::constants::defaults;
use crate::error::Result;
use crate::report::RunContext;
use std::io::Write;
use tracing::debug;

/// 逐列处理一个完成的表块
pub struct TableProcessor<'c> {
    config: &'c FixDefaultConfig,
    rules: DefaultRules,
}

impl<'c> TableProcessor<'c> {
    pub fn new(config: &'c FixDefaultConfig) -> Self {
        Self {
            config,
            rules: DefaultRules::from_config(config),
        }
    }

    /// 为表中所有缺少 DEFAULT 的列生成更新语句
    ///
    /// 缺少 NULL 标记时写出诊断信息并返回错误，调用方应中止整个运行。
    pub fn process_table<W: Write, E: Write>(
        &self,
        block: &TableBlock,
        ctx: &mut RunContext<W, E>,
    ) -> Result<()> {
        debug!("处理表 {}: {} 行", block.name, block.lines.len());

        for source in &block.lines {
            let Some(column) = ColumnDef::parse(source) else {
                continue;
            };

            // 跳过自增主键和 PRIMARY KEY / KEY 等索引定义
            if self.config.is_skipped_column(column.name) || !column.is_column() {
                continue;
            }

            match self.rules.lookup(column.type_keyword) {
                None => {
                    ctx.report_unhandled(&block.name, column.line_nr, column.data_type)?;
                }
                Some(DefaultRule::Literal(default)) => {
                    if let SpliceOutcome::Statement(statement) =
                        self.splice(&block.name, &column, &default, ctx)?
                    {
                        ctx.emit_statement(&terminate_statement(statement))?;
                    }
                }
                Some(DefaultRule::FirstEnumValue) => {
                    self.process_enum_set(&block.name, &column, ctx)?;
                }
            }
        }

        ctx.table_done();
        Ok(())
    }

    fn process_enum_set<W: Write, E: Write>(
        &self,
        table: &str,
        column: &ColumnDef<'_>,
        ctx: &mut RunContext<W, E>,
    ) -> Result<()> {
        let Some(default) = first_enum_value(column.line) else {
            // 先检查 DEFAULT 和 NULL 标记，缺少 NULL 标记时仍然中止整个运行
            if let SpliceOutcome::Statement(_) = self.splice(table, column, "", ctx)? {
                ctx.report_unreadable_enum(table, column.line_nr, column.data_type)?;
            }
            return Ok(());
        };

        let SpliceOutcome::Statement(statement) = self.splice(table, column, default, ctx)? else {
            return Ok(());
        };

        if default == defaults::EMPTY_STRING {
            // 第一个值是 '' 时与其他类型一样直接输出
            ctx.emit_statement(&terminate_statement(statement))
        } else {
            ctx.defer_review(column.line, &statement);
            Ok(())
        }
    }

    fn splice<W: Write, E: Write>(
        &self,
        table: &str,
        column: &ColumnDef<'_>,
        default: &str,
        ctx: &mut RunContext<W, E>,
    ) -> Result<SpliceOutcome> {
        match inject_default(column, table, default) {
            Err(e) if e.is_fatal_schema_error() => {
                debug!("表 {} 第 {} 行缺少 NULL 标记，中止运行", table, column.line_nr);
                ctx.report(&e.to_string())?;
                Err(e)
            }
            other => other,
        }
    }
}
