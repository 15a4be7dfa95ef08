//! # Data URL 组装模块
//!
//! ## 设计思路
//!
//! 产物固定为：
//!
//! ```text
//! <img src="data:{mime};base64,{payload}" alt="Embedded Image" />
//! ```
//!
//! ## 实现思路
//!
//! 先按 `前缀 + 编码长度 + 后缀` 精确计算总长度，一次性分配，再依次写入，
//! 避免 base64 编码过程中反复扩容。

use super::base64;

pub const IMG_PREFIX: &str = "<img src=\"data:";
pub const BASE64_MARKER: &str = ";base64,";
pub const IMG_SUFFIX: &str = "\" alt=\"Embedded Image\" />";

/// 支持嵌入的 MIME 类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Png,
    Svg,
}

impl MimeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 组装结果的精确字节长度。
pub fn assembled_len(data_len: usize, mime: &str) -> usize {
    IMG_PREFIX.len() + mime.len() + BASE64_MARKER.len() + base64::encoded_len(data_len) + IMG_SUFFIX.len()
}

/// 以任意 MIME 标签组装 `<img>` 标签。
///
/// # 示例
/// ```rust
/// use clipboard_embed::embed::assemble;
///
/// assert_eq!(
///     assemble(b"", "image/png"),
///     "<img src=\"data:image/png;base64,\" alt=\"Embedded Image\" />"
/// );
/// ```
pub fn assemble(data: &[u8], mime: &str) -> String {
    let total = assembled_len(data.len(), mime);
    let mut out = String::with_capacity(total);

    out.push_str(IMG_PREFIX);
    out.push_str(mime);
    out.push_str(BASE64_MARKER);
    base64::encode_into(data, &mut out);
    out.push_str(IMG_SUFFIX);

    debug_assert_eq!(out.len(), total);
    out
}

/// 以已知 MIME 类型组装 `<img>` 标签。
pub fn assemble_tag(data: &[u8], mime: MimeType) -> String {
    assemble(data, mime.as_str())
}
