//! 命令行参数定义
//!
//! ```text
//! clipboard-embed [--file PATH] [--config PATH] [--stdout] [--print-config]
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::embed::ImageSource;

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "clipboard-embed")]
#[command(about = "将剪贴板中的 PNG / SVG 转换为内嵌 base64 的 <img> 标签", long_about = None)]
pub struct Cli {
    /// 从文件读取 PNG / SVG（默认读取剪贴板）
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// 从 JSON 文件加载配置
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 将 <img> 标签输出到标准输出（默认写回剪贴板）
    #[arg(long)]
    pub stdout: bool,

    /// 输出当前生效的配置（JSON）后退出
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn source(&self) -> ImageSource {
        match &self.file {
            Some(path) => ImageSource::FilePath(path.clone()),
            None => ImageSource::Clipboard,
        }
    }
}
