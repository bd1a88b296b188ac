use crate::constants::config;
use crate::error::{FixDefaultError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 应用配置结构
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FixDefaultConfig {
    /// 除 `id` 之外额外跳过的列名（包含反引号），例如 "`uuid`"
    pub skip_columns: Vec<String>,
    /// 额外或覆盖内置规则的类型缺省值，键为类型关键字，值为 DEFAULT 字面量
    pub type_defaults: BTreeMap<String, String>,
}

impl FixDefaultConfig {
    /// 智能查找并加载配置文件
    /// 按优先级查找：fix-default.toml -> .fix-default.toml，都不存在时使用内置默认值
    pub fn find_and_load_config() -> Result<Self> {
        Self::find_and_load_config_in(Path::new("."))
    }

    /// 在指定目录下查找并加载配置文件
    pub fn find_and_load_config_in(dir: &Path) -> Result<Self> {
        for config_file in config::CONFIG_FILE_NAMES {
            let path = dir.join(config_file);
            if path.exists() {
                tracing::info!("找到配置文件: {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        tracing::debug!("未找到配置文件，使用内置默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FixDefaultError::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FixDefaultConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 列是否需要跳过：`id` 总是跳过，再加上配置中的 skip_columns
    pub fn is_skipped_column(&self, name: &str) -> bool {
        name == config::ID_COLUMN || self.skip_columns.iter().any(|c| c == name)
    }
}
