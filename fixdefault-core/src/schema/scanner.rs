use super::types::{SourceLine, TableBlock};
use crate::constants::dump;
use tracing::debug;

/// 逐行扫描表结构转储，收集 CREATE TABLE 块中的列定义行
///
/// 同一时间只有一个打开的表块；遇到以 `)` 开头的行时交出完成的表块。
#[derive(Debug, Default)]
pub struct SchemaScanner {
    current: Option<TableBlock>,
    line_nr: usize,
}

impl SchemaScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已读取的行数
    pub fn line_nr(&self) -> usize {
        self.line_nr
    }

    /// 处理下一行，若该行关闭了一个表块则返回该表块
    pub fn feed(&mut self, line: &str) -> Option<TableBlock> {
        self.line_nr += 1;

        let mut tokens = line.trim().split(' ');
        let first = tokens.next().unwrap_or_default();

        if first == "CREATE" && tokens.next() == Some("TABLE") {
            // 前一个未关闭的表块直接丢弃
            self.current = table_name(tokens).map(|name| {
                debug!("第 {} 行开始表定义: {}", self.line_nr, name);
                TableBlock::new(name)
            });
            return None;
        }

        if first == dump::TABLE_CLOSE {
            let block = self.current.take();
            if let Some(block) = &block {
                debug!(
                    "第 {} 行结束表定义: {} ({} 行)",
                    self.line_nr,
                    block.name,
                    block.lines.len()
                );
            }
            return block;
        }

        if let Some(block) = self.current.as_mut() {
            if !first.is_empty() {
                block.lines.push(SourceLine {
                    line_nr: self.line_nr,
                    raw: line.to_string(),
                });
            }
        }

        None
    }
}

/// 取 `CREATE TABLE` 之后的表名，跳过可选的 `IF NOT EXISTS`
fn table_name<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut name = tokens.next()?;
    if name == "IF" {
        if tokens.next()? != "NOT" || tokens.next()? != "EXISTS" {
            return None;
        }
        name = tokens.next()?;
    }
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(dump: &str) -> Vec<TableBlock> {
        let mut scanner = SchemaScanner::new();
        dump.lines().filter_map(|line| scanner.feed(line)).collect()
    }

    #[test]
    fn test_collects_block_lines_with_line_numbers() {
        let blocks = scan(
            "-- dump\n\
             CREATE TABLE `projects` (\n\
             \x20 `id` int(11) NOT NULL,\n\
             \n\
             \x20 `title` varchar(200) NOT NULL,\n\
             \x20 PRIMARY KEY (`id`)\n\
             ) ENGINE=InnoDB DEFAULT CHARSET=utf8;\n",
        );

        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.name, "`projects`");
        let numbers: Vec<usize> = block.lines.iter().map(|l| l.line_nr).collect();
        assert_eq!(numbers, vec![3, 5, 6]);
        assert_eq!(block.lines[1].raw, "  `title` varchar(200) NOT NULL,");
    }

    #[test]
    fn test_stray_close_is_noop() {
        let mut scanner = SchemaScanner::new();
        assert!(scanner.feed(")").is_none());
        assert!(scanner.feed("  `a` int(11) NOT NULL,").is_none());
        assert_eq!(scanner.line_nr(), 2);
    }

    #[test]
    fn test_reopen_discards_previous_block() {
        let blocks = scan(
            "CREATE TABLE `a` (\n\
             \x20 `x` int(11) NOT NULL,\n\
             CREATE TABLE `b` (\n\
             \x20 `y` int(11) NOT NULL\n\
             )\n",
        );

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "`b`");
        assert_eq!(blocks[0].lines.len(), 1);
        assert_eq!(blocks[0].lines[0].line_nr, 4);
    }

    #[test]
    fn test_if_not_exists() {
        let blocks = scan("CREATE TABLE IF NOT EXISTS `c` (\n  `z` text NOT NULL\n)\n");
        assert_eq!(blocks[0].name, "`c`");
    }

    #[test]
    fn test_create_table_without_name_opens_nothing() {
        let blocks = scan("CREATE TABLE\n  `z` text NOT NULL\n)\n");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_sequential_tables() {
        let blocks = scan(
            "CREATE TABLE `a` (\n`x` int NOT NULL\n) ;\nCREATE TABLE `b` (\n`y` int NOT NULL\n) ;\n",
        );
        let names: Vec<&str> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["`a`", "`b`"]);
    }
}
