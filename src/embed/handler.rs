//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Embedder` 只负责流程编排，不直接持有平台资源。
//! 处理链路固定为：
//! 1. 按来源加载原始字节
//! 2. PNG 走结构扫描截取有效前缀，SVG 原样使用
//! 3. 组装 data URL `<img>` 标签
//! 4. （可选）写入剪贴板
//!
//! ## 实现思路
//!
//! - 任一阶段失败都直接返回错误，不会产出部分结果。
//! - 记录 `load/convert/copy/total` 阶段耗时，便于性能诊断。

use std::time::Instant;

use super::source::{ImageSource, RawPayload};
use super::{assemble_tag, scan_png, EmbedConfig, EmbedError, PayloadKind};

/// 图片嵌入处理器。
pub struct Embedder {
    pub(super) config: EmbedConfig,
}

impl Embedder {
    /// 根据配置创建处理器，配置非法时返回错误。
    ///
    /// # 示例
    /// ```rust
    /// use clipboard_embed::embed::{EmbedConfig, Embedder, ImageSource};
    ///
    /// let embedder = Embedder::new(EmbedConfig::default())?;
    /// let tag = embedder.process(ImageSource::Bytes(b"<svg/>".to_vec()))?;
    /// assert!(tag.starts_with("<img src=\"data:image/svg+xml;base64,"));
    /// # Ok::<(), clipboard_embed::embed::EmbedError>(())
    /// ```
    pub fn new(config: EmbedConfig) -> Result<Self, EmbedError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// 纯转换：不做任何 I/O。
    pub fn convert(&self, payload: &RawPayload) -> Result<String, EmbedError> {
        let data = match payload.kind {
            PayloadKind::Png => scan_png(&payload.bytes)?,
            PayloadKind::Svg => payload.bytes.as_slice(),
        };

        Ok(assemble_tag(data, payload.kind.mime()))
    }

    /// 加载并转换，返回 `<img>` 标签。
    pub fn process(&self, source: ImageSource) -> Result<String, EmbedError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let payload = self.load(source)?;
        let load_elapsed = load_start.elapsed();

        let convert_start = Instant::now();
        let tag = self.convert(&payload)?;
        let convert_elapsed = convert_start.elapsed();

        log::info!(
            "✅ 转换完成 - 来源: {} 类型: {} 输入: {} 字节 输出: {} 字符 | load={}ms convert={}ms total={}ms",
            payload.source_hint,
            payload.kind.mime(),
            payload.bytes.len(),
            tag.len(),
            load_elapsed.as_millis(),
            convert_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(tag)
    }

    /// 处理主入口：加载、转换并写回剪贴板。
    pub fn process_and_copy(&self, source: ImageSource) -> Result<String, EmbedError> {
        let tag = self.process(source)?;

        let copy_start = Instant::now();
        self.write_text_to_clipboard(&tag)?;
        log::info!(
            "📋 已写入剪贴板 - {} 字符 copy={}ms",
            tag.len(),
            copy_start.elapsed().as_millis()
        );

        Ok(tag)
    }
}
