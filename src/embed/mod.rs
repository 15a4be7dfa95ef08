//! # 图片嵌入模块（embed）
//!
//! ## 设计思路
//!
//! 该模块将“来源加载 → PNG 结构扫描 → base64 编码 → data URL 组装 → 写入剪贴板”
//! 按职责拆分为多个子模块，核心解析与编码部分不依赖任何平台资源。
//!
//! - `reader`：有界字节游标（大端整数、零拷贝切片）
//! - `png`：签名校验 + 逐块扫描，定位真实结尾
//! - `base64`：标准 base64 编码
//! - `data_url`：`<img>` 标签组装
//! - `handler`：编排整条处理流水线
//! - `loader`：剪贴板 / 文件 / 内存加载
//! - `clipboard_writer`：写入剪贴板与重试
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（参数解析）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（来源加载 + 体积校验 + SVG 嗅探）
//!    ├─ png.rs → reader.rs（截取有效 PNG 前缀）
//!    ├─ data_url.rs → base64.rs（组装标签）
//!    └─ clipboard_writer.rs（写剪贴板 + 重试）
//!    ↓
//! 返回 EmbedError / AppError
//! ```

pub mod base64;
mod clipboard_writer;
mod config;
mod data_url;
mod error;
mod handler;
mod loader;
mod png;
mod reader;
mod source;

pub use config::EmbedConfig;
pub use data_url::{
    assemble, assemble_tag, assembled_len, MimeType, BASE64_MARKER, IMG_PREFIX, IMG_SUFFIX,
};
pub use error::EmbedError;
pub use handler::Embedder;
pub use png::{scan_png, scan_png_len, IEND, PNG_SIGNATURE};
pub use reader::BoundedReader;
pub use source::{classify, sniff_svg, ImageSource, PayloadKind, RawPayload};
