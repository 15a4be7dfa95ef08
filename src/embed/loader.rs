//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理不同来源（剪贴板 / 本地文件 / 内存）的原始字节加载，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败，减少不必要内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - 剪贴板：先读文本，若为 SVG 直接使用；否则读取图片像素并重新编码为 PNG。
//! - 文件：metadata（不存在即报错）+ 体积限制 + 读取。
//! - 内存：直接按内容分类。

use std::borrow::Cow;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::source::{ImageSource, RawPayload};
use super::{EmbedError, Embedder, PayloadKind};

impl Embedder {
    /// 按来源加载原始载荷。
    pub(crate) fn load(&self, source: ImageSource) -> Result<RawPayload, EmbedError> {
        match source {
            ImageSource::Clipboard => self.load_from_clipboard(),
            ImageSource::FilePath(path) => self.load_from_file(&path),
            ImageSource::Bytes(bytes) => Ok(RawPayload::classified(bytes, "memory")),
        }
    }

    /// 从本地文件加载原始字节。
    pub(crate) fn load_from_file(&self, path: &Path) -> Result<RawPayload, EmbedError> {
        let config = &self.config;
        log::info!("📁 读取文件 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path).map_err(|e| file_error(path, &e))?;

        if metadata.len() > config.max_input_bytes {
            return Err(EmbedError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_input_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| file_error(path, &e))?;

        Ok(RawPayload::classified(bytes, "file"))
    }

    /// 从系统剪贴板加载：文本 SVG 优先，其次图片。
    pub(crate) fn load_from_clipboard(&self) -> Result<RawPayload, EmbedError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| EmbedError::Clipboard(format!("无法打开剪贴板：{}", e)))?;

        match clipboard.get_text() {
            Ok(text) => {
                if let Some(payload) = svg_payload_from_text(text) {
                    log::info!("📝 剪贴板包含 SVG 文本 - 长度: {}", payload.bytes.len());
                    return Ok(payload);
                }
                log::debug!("剪贴板文本不是 SVG，继续检查图片");
            }
            Err(e) => log::debug!("剪贴板无文本：{}", e),
        }

        let image = clipboard
            .get_image()
            .map_err(|e| EmbedError::NoImage(format!("剪贴板中没有 SVG 或 PNG：{}", e)))?;

        log::info!("🖼️ 剪贴板包含图片 - 尺寸: {}x{}", image.width, image.height);

        let png = encode_rgba_as_png(image.width, image.height, image.bytes)?;
        Ok(RawPayload {
            bytes: png,
            kind: PayloadKind::Png,
            source_hint: "clipboard",
        })
    }
}

fn file_error(path: &Path, err: &std::io::Error) -> EmbedError {
    match err.kind() {
        ErrorKind::NotFound => EmbedError::FileSystem(format!("文件不存在：{}", path.display())),
        _ => EmbedError::FileSystem(format!("无法读取图片文件 {}：{}", path.display(), err)),
    }
}

/// 文本仅在通过 SVG 头部嗅探时才作为载荷。
fn svg_payload_from_text(text: String) -> Option<RawPayload> {
    let payload = RawPayload::classified(text.into_bytes(), "clipboard");
    (payload.kind == PayloadKind::Svg).then_some(payload)
}

/// 剪贴板图片以 RGBA 像素提供，需重新编码为 PNG 字节流。
fn encode_rgba_as_png(
    width: usize,
    height: usize,
    bytes: Cow<'_, [u8]>,
) -> Result<Vec<u8>, EmbedError> {
    let width = u32::try_from(width)
        .map_err(|_| EmbedError::ResourceLimit(format!("图片宽度溢出：{}", width)))?;
    let height = u32::try_from(height)
        .map_err(|_| EmbedError::ResourceLimit(format!("图片高度溢出：{}", height)))?;

    let image = RgbaImage::from_raw(width, height, bytes.into_owned())
        .ok_or_else(|| EmbedError::Encode("RGBA 缓冲长度与尺寸不一致".to_string()))?;

    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| EmbedError::Encode(format!("PNG 编码失败：{}", e)))?;

    Ok(out.into_inner())
}
