use super::types::ColumnDef;
use crate::constants::dump;
use crate::error::{FixDefaultError, Result};

/// 注入 DEFAULT 的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SpliceOutcome {
    /// 列已声明 DEFAULT，无需处理
    AlreadyDefaulted,
    /// 生成的 ALTER TABLE 语句
    Statement(String),
}

/// 在 NULL 标记之后注入 " DEFAULT <value>" 并生成更新语句
///
/// 只有第一个 `NULL` / `NULL,` 决定插入位置；第一个 `NULL,` 会被改写为 `NULL`，
/// 逗号由调用方在语句末尾统一处理。插入位置是最后一个 token 时追加 `;`。
///
/// 列定义没有任何 NULL 标记时返回 [`FixDefaultError::MissingNull`]。
///
/// ```text
/// `lastRun` date NOT NULL,
/// ALTER TABLE `t` CHANGE `lastRun` `lastRun` date NOT NULL DEFAULT '0000-00-00';
/// ```
pub fn inject_default(column: &ColumnDef<'_>, table: &str, default: &str) -> Result<SpliceOutcome> {
    let mut tokens: Vec<String> = column.tokens().map(str::to_string).collect();
    let mut comma_rewritten = false;
    let mut null_pos = None;

    // token 0 是列名，不会是 NULL 标记
    for (idx, token) in tokens.iter_mut().enumerate().skip(1) {
        if *token == dump::DEFAULT_KEYWORD {
            return Ok(SpliceOutcome::AlreadyDefaulted);
        }

        let is_comma_null = *token == dump::NULL_MARKER_COMMA;
        if is_comma_null && !comma_rewritten {
            *token = dump::NULL_MARKER.to_string();
            comma_rewritten = true;
        }

        if (is_comma_null || *token == dump::NULL_MARKER) && null_pos.is_none() {
            null_pos = Some(idx);
        }
    }

    let Some(pos) = null_pos else {
        return Err(FixDefaultError::MissingNull {
            table: table.to_string(),
            line_nr: column.line_nr,
            tokens: tokens.join(" "),
        });
    };

    tokens[pos].push_str(&format!(" {} {default}", dump::DEFAULT_KEYWORD));
    if pos == tokens.len() - 1 {
        tokens[pos].push(';');
    }

    Ok(SpliceOutcome::Statement(format!(
        "ALTER TABLE {table} CHANGE {} {}",
        tokens[0],
        tokens.join(" ")
    )))
}

/// 语句以 `,` 结尾时替换为 `;`
pub fn terminate_statement(mut statement: String) -> String {
    if statement.ends_with(',') {
        statement.pop();
        statement.push(';');
    }
    statement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::SourceLine;

    fn splice(raw: &str, default: &str) -> Result<SpliceOutcome> {
        let source = SourceLine {
            line_nr: 10,
            raw: raw.to_string(),
        };
        let column = ColumnDef::parse(&source).unwrap();
        inject_default(&column, "`projects`", default)
    }

    fn statement(raw: &str, default: &str) -> String {
        match splice(raw, default).unwrap() {
            SpliceOutcome::Statement(s) => s,
            other => panic!("expected statement, got {other:?}"),
        }
    }

    #[test]
    fn test_not_null_last_token() {
        assert_eq!(
            statement("  `project_start` date NOT NULL,", "'0000-00-00'"),
            "ALTER TABLE `projects` CHANGE `project_start` `project_start` date NOT NULL DEFAULT '0000-00-00';"
        );
    }

    #[test]
    fn test_null_without_comma_at_end() {
        assert_eq!(
            statement("`note` text NULL", "''"),
            "ALTER TABLE `projects` CHANGE `note` `note` text NULL DEFAULT '';"
        );
    }

    #[test]
    fn test_trailing_modifiers_keep_comma() {
        let s = statement("`cnt` int(11) NOT NULL COMMENT 'counter',", "0");
        assert_eq!(
            s,
            "ALTER TABLE `projects` CHANGE `cnt` `cnt` int(11) NOT NULL DEFAULT 0 COMMENT 'counter',"
        );
        assert_eq!(
            terminate_statement(s),
            "ALTER TABLE `projects` CHANGE `cnt` `cnt` int(11) NOT NULL DEFAULT 0 COMMENT 'counter';"
        );
    }

    #[test]
    fn test_no_terminator_when_not_last_and_no_comma() {
        let s = statement("`cnt` int(11) NOT NULL COMMENT 'counter'", "0");
        assert!(s.ends_with("COMMENT 'counter'"));
        assert_eq!(terminate_statement(s.clone()), s);
    }

    #[test]
    fn test_first_null_wins() {
        // 引号内的 'NULL,' 不是标记；后面的 NULL, 是第一个带逗号的标记，会被改写
        let s = statement("`a` varchar(10) NULL COMMENT 'NULL,' NULL,", "''");
        assert_eq!(
            s,
            "ALTER TABLE `projects` CHANGE `a` `a` varchar(10) NULL DEFAULT '' COMMENT 'NULL,' NULL"
        );
    }

    #[test]
    fn test_only_first_comma_null_rewritten() {
        let s = statement("`a` varchar(10) NULL, NULL,", "''");
        assert_eq!(
            s,
            "ALTER TABLE `projects` CHANGE `a` `a` varchar(10) NULL DEFAULT '' NULL,"
        );
    }

    #[test]
    fn test_existing_default_skips() {
        assert_eq!(
            splice("`date_of_birth` date DEFAULT NULL,", "'0000-00-00'").unwrap(),
            SpliceOutcome::AlreadyDefaulted
        );
        assert_eq!(
            splice("`x` int(11) NOT NULL DEFAULT '0',", "0").unwrap(),
            SpliceOutcome::AlreadyDefaulted
        );
    }

    #[test]
    fn test_missing_null_is_fatal() {
        let err = splice("`x` int(11) unsigned,", "0").unwrap_err();
        assert!(err.is_fatal_schema_error());
        assert_eq!(
            err.to_string(),
            "[`projects`, 10] Missing NULL: `x` int(11) unsigned,"
        );
    }
}
