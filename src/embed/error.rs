//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载转换链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 解析类错误（`OutOfRange` / `InvalidSignature`）携带结构化字段，
//! 调用侧可以据此决定是上报终止，还是改走 SVG 分支。

/// 转换链路统一错误类型。
///
/// 该类型会在二进制入口被上转为 `AppError`。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    /// 读取或定位超出了读取器上限。
    #[error("越界读取：位置 {position} 请求 {requested} 字节，剩余 {remaining} 字节")]
    OutOfRange {
        position: usize,
        requested: usize,
        remaining: usize,
    },

    /// 前 8 字节与 PNG 签名不符。
    #[error("无效的 PNG 签名：第 {index} 字节应为 {expected}，实际为 {actual}")]
    InvalidSignature { index: usize, expected: u8, actual: u8 },

    /// 配置解析或取值校验失败。
    #[error("配置错误：{0}")]
    Config(String),

    #[error("未找到可嵌入的图片：{0}")]
    NoImage(String),

    #[error("剪贴板错误：{0}")]
    Clipboard(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("编码错误：{0}")]
    Encode(String),
}

impl From<EmbedError> for String {
    fn from(error: EmbedError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::EmbedError;

    #[test]
    fn invalid_signature_message_names_index_and_bytes() {
        let err = EmbedError::InvalidSignature {
            index: 0,
            expected: 137,
            actual: 138,
        };
        let message: String = err.into();

        assert!(message.contains("第 0 字节"));
        assert!(message.contains("137"));
        assert!(message.contains("138"));
    }
}
