//! # 剪贴板图片内嵌工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  外部协作者：剪贴板 / 文件（arboard · std::fs）          │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ 原始字节（PNG 或 SVG 文本）
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓            核心 (embed)                          │
//! │                                                          │
//! │  BoundedReader ──▶ PNG 结构扫描 ──▶ 有效字节前缀          │
//! │                                        ↓                 │
//! │                      base64 编码 ──▶ <img> 组装          │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ <img src="data:...;base64,..." alt="Embedded Image" />
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  外部协作者：剪贴板写入 / 标准输出                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，二进制入口的返回类型 |
//! | [`embed`] | 读取器、PNG 扫描、base64、data URL 组装与流水线编排 |
//! | [`cli`] | 命令行参数解析 |

pub mod cli;
pub mod embed;
pub mod error;
