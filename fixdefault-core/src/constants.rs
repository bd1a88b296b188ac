/// 缺省值字面量
pub mod defaults {
    /// date 类型缺省值
    pub const DATE: &str = "'0000-00-00'";

    /// datetime / timestamp 类型缺省值
    pub const DATETIME: &str = "'0000-00-00 00:00:00'";

    /// time 类型缺省值
    pub const TIME: &str = "'00:00:00'";

    /// 字符串和二进制类型缺省值
    pub const EMPTY_STRING: &str = "''";

    /// 数值类型缺省值
    pub const ZERO: &str = "0";
}

/// 表结构转储中的关键字和标记
pub mod dump {
    /// 列名使用的引号
    pub const IDENTIFIER_QUOTE: char = '`';

    /// 表定义结束行的首个 token
    pub const TABLE_CLOSE: &str = ")";

    /// 已声明缺省值的关键字
    pub const DEFAULT_KEYWORD: &str = "DEFAULT";

    /// NULL 标记
    pub const NULL_MARKER: &str = "NULL";

    /// 带逗号的 NULL 标记
    pub const NULL_MARKER_COMMA: &str = "NULL,";
}

/// 输出相关常量
pub mod output {
    /// 需要人工确认的 SET/ENUM 语句前的横幅
    pub const REVIEW_BANNER: &str =
        "\n#\n# SET/ENUM - first value as default - check these before updating:\n#\n\n";

    /// 至少生成过一条语句时输出的结束行
    pub const CLOSING_LINE: &str = "All columns with defaults - nothing to do\n";

    /// 审核行前缀
    pub const REVIEW_PREFIX: &str = "# ";
}

/// 配置文件相关常量
pub mod config {
    /// 按优先级查找的配置文件名
    pub const CONFIG_FILE_NAMES: &[&str] = &["fix-default.toml", ".fix-default.toml"];

    /// 总是跳过的列（自增主键），配置中的 skip_columns 只能追加
    pub const ID_COLUMN: &str = "`id`";
}
