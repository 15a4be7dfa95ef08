//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入类型”和“流水线中间结果”解耦：
//! - `ImageSource` 表示外部来源语义
//! - `RawPayload` 表示已加载但未扫描的字节
//! - `PayloadKind` 表示嵌入时使用的 MIME 分支

use std::path::PathBuf;

use super::MimeType;

/// 图片输入来源。
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// 系统剪贴板（先文本 SVG，后图片）。
    Clipboard,
    /// 本地文件路径来源。
    FilePath(PathBuf),
    /// 调用方已持有的内存字节。
    Bytes(Vec<u8>),
}

/// 载荷分类结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Png,
    Svg,
}

impl PayloadKind {
    pub fn mime(self) -> MimeType {
        match self {
            Self::Png => MimeType::Png,
            Self::Svg => MimeType::Svg,
        }
    }
}

/// 加载阶段输出：原始字节、分类与来源标识。
#[derive(Debug, Clone)]
pub struct RawPayload {
    pub bytes: Vec<u8>,
    pub kind: PayloadKind,
    /// 来源提示（用于日志与诊断）。
    pub source_hint: &'static str,
}

impl RawPayload {
    /// 按内容自动分类构造载荷。
    pub fn classified(bytes: Vec<u8>, source_hint: &'static str) -> Self {
        let kind = classify(&bytes);
        Self {
            bytes,
            kind,
            source_hint,
        }
    }
}

/// SVG 头部嗅探：以 `<?xml` 或 `<svg` 开头。
pub fn sniff_svg(bytes: &[u8]) -> bool {
    bytes.starts_with(b"<?xml") || bytes.starts_with(b"<svg")
}

/// 非 SVG 一律交给 PNG 扫描器裁决。
pub fn classify(bytes: &[u8]) -> PayloadKind {
    if sniff_svg(bytes) {
        PayloadKind::Svg
    } else {
        PayloadKind::Png
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, sniff_svg, PayloadKind, RawPayload};
    use crate::embed::MimeType;

    #[test]
    fn svg_headers_are_recognized() {
        assert!(sniff_svg(b"<?xml version=\"1.0\"?><svg/>"));
        assert!(sniff_svg(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"));
    }

    #[test]
    fn leading_whitespace_is_not_trimmed() {
        assert!(!sniff_svg(b"  <svg/>"));
        assert!(!sniff_svg(b"<html><svg/></html>"));
        assert!(!sniff_svg(b""));
    }

    #[test]
    fn everything_else_is_routed_to_png_scanner() {
        assert_eq!(classify(&[137, 80, 78, 71]), PayloadKind::Png);
        assert_eq!(classify(b"plain text"), PayloadKind::Png);
    }

    #[test]
    fn classified_payload_carries_mime() {
        let payload = RawPayload::classified(b"<svg/>".to_vec(), "memory");
        assert_eq!(payload.kind.mime(), MimeType::Svg);
        assert_eq!(payload.source_hint, "memory");
    }
}
