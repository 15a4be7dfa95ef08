//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，二进制入口的所有失败都归并到这里，
//! 由 `main` 统一记录日志并退出。参数错误由 clap 自行报告。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `EmbedError`（含配置错误）、`std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::embed::EmbedError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 转换流水线错误（配置 / 加载 / 扫描 / 写入）
    #[error("{0}")]
    Embed(#[from] EmbedError),

    /// 标准输出等 I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}
