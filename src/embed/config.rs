//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `EmbedConfig`，保证运行时行为可观测、可调整、可测试。
//!
//! ## 实现思路
//!
//! - `Default` 提供开箱可用的配置。
//! - 支持从 JSON 文件加载，缺省字段回落到默认值（`#[serde(default)]`）。
//! - `validate` 在加载后统一检查取值范围，解析与校验失败均归为 `EmbedError::Config`。
//! - `to_json_pretty` 输出当前生效配置，便于排查。

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::EmbedError;

/// 转换与写入配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// 从文件读取原始字节时允许的最大体积（字节）。
    pub max_input_bytes: u64,
    /// 写入剪贴板失败时最大重试次数。
    pub clipboard_retries: u32,
    /// 重试基础间隔（毫秒）。
    pub clipboard_retry_delay_ms: u64,
    /// 单次退避延迟上限（毫秒）。
    pub clipboard_retry_max_delay_ms: u64,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 50 * 1024 * 1024,
            clipboard_retries: 3,
            clipboard_retry_delay_ms: 100,
            clipboard_retry_max_delay_ms: 900,
        }
    }
}

impl EmbedConfig {
    /// 从 JSON 文件加载配置并校验。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use clipboard_embed::embed::EmbedConfig;
    ///
    /// let config = EmbedConfig::from_json_file("embed.json")?;
    /// # Ok::<(), clipboard_embed::embed::EmbedError>(())
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EmbedError::FileSystem(format!("无法读取配置文件 {}：{}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, EmbedError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| EmbedError::Config(format!("解析配置失败：{}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, EmbedError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EmbedError::Config(format!("序列化配置失败：{}", e)))
    }

    pub fn validate(&self) -> Result<(), EmbedError> {
        if self.max_input_bytes == 0 {
            return Err(EmbedError::Config("max_input_bytes 不能为 0".to_string()));
        }
        if self.clipboard_retries > 20 {
            return Err(EmbedError::Config("clipboard_retries 不能大于 20".to_string()));
        }
        if self.clipboard_retry_delay_ms > self.clipboard_retry_max_delay_ms {
            return Err(EmbedError::Config(
                "clipboard_retry_delay_ms 不能大于 clipboard_retry_max_delay_ms".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EmbedConfig;
    use crate::embed::EmbedError;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = EmbedConfig::from_json_str(r#"{ "clipboard_retries": 5 }"#)
            .expect("partial config should parse");

        assert_eq!(config.clipboard_retries, 5);
        assert_eq!(config.max_input_bytes, EmbedConfig::default().max_input_bytes);
    }

    #[test]
    fn inverted_retry_delays_are_rejected() {
        let result = EmbedConfig::from_json_str(
            r#"{ "clipboard_retry_delay_ms": 500, "clipboard_retry_max_delay_ms": 100 }"#,
        );

        assert!(matches!(result, Err(EmbedError::Config(_))));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = EmbedConfig::from_json_str("{ not json");

        match result {
            Err(EmbedError::Config(message)) => assert!(message.starts_with("解析配置失败")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_config_file_is_a_file_system_error() {
        let result = EmbedConfig::from_json_file("/definitely/not/here/embed.json");
        assert!(matches!(result, Err(EmbedError::FileSystem(_))));
    }

    #[test]
    fn printed_config_parses_back_to_same_values() {
        let config = EmbedConfig {
            clipboard_retries: 7,
            ..EmbedConfig::default()
        };
        let json = config.to_json_pretty().expect("serialize config");

        assert!(json.contains("\"clipboard_retries\": 7"));
        assert_eq!(EmbedConfig::from_json_str(&json), Ok(config));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EmbedConfig::default().validate().is_ok());
    }
}
