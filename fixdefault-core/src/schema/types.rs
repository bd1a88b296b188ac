use crate::constants::dump;

/// 转储文件中的一行及其行号（从 1 开始）
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub line_nr: usize,
    pub raw: String,
}

/// 一个 CREATE TABLE 块
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub name: String,
    pub lines: Vec<SourceLine>,
}

impl TableBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }
}

/// 列定义行拆分后的结构化记录
///
/// 例如 "`name` varchar(200) NOT NULL DEFAULT ''," 拆分为：
/// - `name`: "`name`"
/// - `data_type`: "varchar(200)"
/// - `type_keyword`: "varchar"
/// - `modifiers`: ["NOT", "NULL", "DEFAULT", "'',"]
///
/// 按单个空格拆分，连续空格会产生空 token，重新拼接时原样保留。
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef<'a> {
    pub line_nr: usize,
    /// 去掉首尾空白后的原始行
    pub line: &'a str,
    pub name: &'a str,
    pub data_type: &'a str,
    pub type_keyword: &'a str,
    pub modifiers: Vec<&'a str>,
}

impl<'a> ColumnDef<'a> {
    /// 拆分一行，少于两个 token 时返回 None
    pub fn parse(source: &'a SourceLine) -> Option<Self> {
        let line = source.raw.trim();
        let mut tokens = line.split(' ');
        let name = tokens.next()?;
        let data_type = tokens.next()?;
        let type_keyword = data_type.split('(').next().unwrap_or(data_type);

        Some(Self {
            line_nr: source.line_nr,
            line,
            name,
            data_type,
            type_keyword,
            modifiers: tokens.collect(),
        })
    }

    /// 以反引号开头的才是列定义，其余是 PRIMARY KEY / KEY 等索引定义
    pub fn is_column(&self) -> bool {
        self.name.starts_with(dump::IDENTIFIER_QUOTE)
    }

    /// 按位置排列的全部 token：列名、类型、修饰符
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        [self.name, self.data_type]
            .into_iter()
            .chain(self.modifiers.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &str) -> SourceLine {
        SourceLine {
            line_nr: 7,
            raw: raw.to_string(),
        }
    }

    #[test]
    fn test_parse_column() {
        let source = line("  `name` varchar(200) NOT NULL DEFAULT '',\n");
        let column = ColumnDef::parse(&source).unwrap();

        assert_eq!(column.line_nr, 7);
        assert_eq!(column.name, "`name`");
        assert_eq!(column.data_type, "varchar(200)");
        assert_eq!(column.type_keyword, "varchar");
        assert_eq!(column.modifiers, vec!["NOT", "NULL", "DEFAULT", "'',"]);
        assert!(column.is_column());
    }

    #[test]
    fn test_parse_degenerate_line() {
        assert!(ColumnDef::parse(&line("   ")).is_none());
        assert!(ColumnDef::parse(&line("`lonely`")).is_none());
    }

    #[test]
    fn test_key_definition_is_not_column() {
        let source = line("  KEY `splitId` (`splitId`),");
        let column = ColumnDef::parse(&source).unwrap();
        assert!(!column.is_column());
    }

    #[test]
    fn test_tokens_keep_empty_gaps() {
        let source = line("`lastRun` date NOT NULL   DEFAULT '0000-00-00',");
        let column = ColumnDef::parse(&source).unwrap();
        let tokens: Vec<&str> = column.tokens().collect();
        assert_eq!(
            tokens,
            vec!["`lastRun`", "date", "NOT", "NULL", "", "", "DEFAULT", "'0000-00-00',"]
        );
        assert_eq!(tokens.join(" "), column.line);
    }
}
