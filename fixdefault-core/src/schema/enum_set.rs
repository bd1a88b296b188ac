/// 取 enum/set 类型声明中的第一个值（包含两侧的单引号）
///
/// 输入: "`position` enum('Master Student','PhD Student') NOT NULL,"
/// 返回: "'Master Student'"
///
/// 不处理值内部被转义的单引号。只有一个值的声明以 `')` 结束。
pub fn first_enum_value(line: &str) -> Option<&str> {
    let open = line.find("('")?;
    let rest = &line[open + 1..];

    let end = match (rest.find("',"), rest.find("')")) {
        (Some(a), Some(b)) => a.min(b),
        (a, b) => a.or(b)?,
    };

    Some(&rest[..=end])
}
