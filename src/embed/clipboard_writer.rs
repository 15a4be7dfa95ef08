//! # 剪贴板写入模块
//!
//! ## 设计思路
//!
//! 将与操作系统剪贴板交互的逻辑独立出来，便于隔离平台不稳定因素。
//! 其他应用同时监控剪贴板时，打开剪贴板可能短暂失败（被占用），因此进行有限重试。
//!
//! ## 实现思路
//!
//! - 失败分为 `Busy / Transient / Fatal` 三类，仅前两类可重试。
//! - 退避延迟按指数增长，并以 `clipboard_retry_max_delay_ms` 封顶。
//! - Linux（X11 / Wayland）上剪贴板内容由持有进程按需提供，进程退出即丢失。
//!   命令行进程写入后需阻塞，直到剪贴板管理器或其他程序接管内容。

use std::time::Duration;

use super::{EmbedError, Embedder};

/// 写入后是否需保持进程存活直至内容被接管。
const HOLD_SELECTION_UNTIL_REPLACED: bool = cfg!(target_os = "linux");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardFailureKind {
    Busy,
    Transient,
    Fatal,
}

#[derive(Debug, Clone)]
struct ClipboardWriteFailure {
    kind: ClipboardFailureKind,
    message: String,
}

impl ClipboardWriteFailure {
    fn from_arboard(context: &str, err: arboard::Error) -> Self {
        let kind = match err {
            arboard::Error::ClipboardOccupied => ClipboardFailureKind::Busy,
            arboard::Error::ClipboardNotSupported => ClipboardFailureKind::Fatal,
            _ => ClipboardFailureKind::Transient,
        };
        Self {
            kind,
            message: format!("{}：{}", context, err),
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self.kind, ClipboardFailureKind::Busy | ClipboardFailureKind::Transient)
    }
}

fn compute_backoff_delay(base_delay_ms: u64, attempt: u32, max_delay_ms: u64) -> u64 {
    let exp = base_delay_ms.saturating_mul(1_u64 << attempt.saturating_sub(1).min(8));
    exp.min(max_delay_ms.max(base_delay_ms))
}

impl Embedder {
    /// 将组装好的文本写入剪贴板（含重试）。
    pub(crate) fn write_text_to_clipboard(&self, text: &str) -> Result<(), EmbedError> {
        let config = &self.config;
        if HOLD_SELECTION_UNTIL_REPLACED {
            log::info!("⏳ 写入后将保持剪贴板所有权，直到内容被其他程序接管");
        }

        let max_attempts = config.clipboard_retries.saturating_add(1);
        let mut attempt = 1_u32;

        loop {
            match try_write_text(text) {
                Ok(()) => {
                    if attempt > 1 {
                        log::info!("✅ 第 {} 次尝试写入剪贴板成功", attempt);
                    }
                    return Ok(());
                }
                Err(failure) if failure.is_retryable() && attempt < max_attempts => {
                    let delay = compute_backoff_delay(
                        config.clipboard_retry_delay_ms,
                        attempt,
                        config.clipboard_retry_max_delay_ms,
                    );
                    log::warn!(
                        "⚠️ 写入剪贴板失败（{:?}），{}ms 后重试 [{}/{}]：{}",
                        failure.kind,
                        delay,
                        attempt,
                        max_attempts,
                        failure.message
                    );
                    std::thread::sleep(Duration::from_millis(delay));
                    attempt += 1;
                }
                Err(failure) => {
                    log::error!("❌ 写入剪贴板失败：{}", failure.message);
                    return Err(EmbedError::Clipboard(failure.message));
                }
            }
        }
    }
}

fn try_write_text(text: &str) -> Result<(), ClipboardWriteFailure> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ClipboardWriteFailure::from_arboard("打开剪贴板失败", e))?;
    set_text_and_hand_off(&mut clipboard, text)
        .map_err(|e| ClipboardWriteFailure::from_arboard("复制失败", e))
}

#[cfg(target_os = "linux")]
fn set_text_and_hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text_and_hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
