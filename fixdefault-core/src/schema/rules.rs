use crate::config::FixDefaultConfig;
use crate::constants::defaults;
use std::collections::BTreeMap;

/// 某个列类型应当使用的缺省值
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultRule {
    /// 固定的 DEFAULT 字面量
    Literal(String),
    /// enum/set：取类型声明中的第一个值
    FirstEnumValue,
}

/// 内置的类型缺省值规则，类型关键字区分大小写
pub fn builtin_rule(type_keyword: &str) -> Option<DefaultRule> {
    let literal = match type_keyword {
        "date" => defaults::DATE,
        "datetime" | "timestamp" => defaults::DATETIME,
        "time" => defaults::TIME,
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "blob"
        | "tinyblob" | "mediumblob" | "longblob" => defaults::EMPTY_STRING,
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "decimal"
        | "number" | "float" | "double" | "bit" => defaults::ZERO,
        "enum" | "set" => return Some(DefaultRule::FirstEnumValue),
        _ => return None,
    };
    Some(DefaultRule::Literal(literal.to_string()))
}

/// 规则表：配置中的 type_defaults 优先于内置规则
#[derive(Debug, Clone, Default)]
pub struct DefaultRules {
    overrides: BTreeMap<String, String>,
}

impl DefaultRules {
    pub fn from_config(config: &FixDefaultConfig) -> Self {
        Self {
            overrides: config.type_defaults.clone(),
        }
    }

    pub fn lookup(&self, type_keyword: &str) -> Option<DefaultRule> {
        match self.overrides.get(type_keyword) {
            Some(literal) => Some(DefaultRule::Literal(literal.clone())),
            None => builtin_rule(type_keyword),
        }
    }
}
