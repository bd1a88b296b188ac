use crate::project_info::{metadata, version_info};
use clap::Parser;
use std::path::{Path, PathBuf};

/// MySQL 表结构缺省值修复工具
#[derive(Parser, Debug)]
#[command(name = "mysql-fix-default")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 表结构转储文件（mysqldump --no-data 生成）
    pub file: Option<String>,

    /// 配置文件路径（默认查找 fix-default.toml / .fix-default.toml）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 输入文件，参数缺失或为空时返回 None
    pub fn input_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|file| !file.is_empty())
            .map(Path::new)
    }
}
