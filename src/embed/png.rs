//! # PNG 结构扫描模块
//!
//! ## 设计思路
//!
//! 只做“结构层面”的校验：确认签名，然后逐块走过 `length / type / data / crc`，
//! 直到遇到 `IEND` 为止，得到最短的合法 PNG 前缀长度。
//! CRC 正确性、块类型合法性等语义校验均不在此处处理。
//!
//! ## 实现思路
//!
//! ```text
//! ExpectSignature ──签名匹配──▶ ScanningChunks ──IEND / 数据耗尽──▶ Done(len)
//!        │                           │
//!        └─ InvalidSignature         └─ OutOfRange（块长度越界）
//! ```
//!
//! - 数据在 `IEND` 之前耗尽时视为成功，返回已消费的长度（尽力嵌入）。
//! - `IEND` 的 CRC 之后的尾随字节会被静默丢弃。
//! - 块声明长度超过剩余字节时整体失败，不返回任何部分结果。

use super::{BoundedReader, EmbedError};

/// PNG 文件固定的 8 字节签名。
pub static PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// 终止块类型标记。
pub const IEND: [u8; 4] = *b"IEND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ExpectSignature,
    ScanningChunks,
    Done,
}

/// 计算合法 PNG 前缀的字节长度（签名直至终止块 CRC）。
///
/// # 示例
/// ```rust
/// use clipboard_embed::embed::{scan_png_len, PNG_SIGNATURE};
///
/// let mut png = PNG_SIGNATURE.to_vec();
/// png.extend_from_slice(&[0, 0, 0, 0]);
/// png.extend_from_slice(b"IEND");
/// png.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
/// png.extend_from_slice(b"trailing");
///
/// assert_eq!(scan_png_len(&png)?, 20);
/// # Ok::<(), clipboard_embed::embed::EmbedError>(())
/// ```
pub fn scan_png_len(bytes: &[u8]) -> Result<usize, EmbedError> {
    let mut reader = BoundedReader::new(bytes);
    let mut state = ScanState::ExpectSignature;
    let mut chunk_count = 0_usize;
    let mut saw_iend = false;

    while state != ScanState::Done {
        match state {
            ScanState::ExpectSignature => {
                check_signature(&mut reader).inspect_err(|err| {
                    if matches!(err, EmbedError::InvalidSignature { .. }) {
                        log::warn!(
                            "⚠️ PNG 签名不匹配，探测到的实际类型: {}",
                            detected_mime(bytes)
                        );
                    }
                })?;
                state = ScanState::ScanningChunks;
            }
            ScanState::ScanningChunks => {
                if !reader.has_remaining() {
                    state = ScanState::Done;
                    continue;
                }

                let length = reader.read_u32_be()?;
                let tag = reader.read_span(4)?;
                reader.skip(length as usize)?;
                let _crc = reader.read_u32_be()?;
                chunk_count += 1;

                log::trace!(
                    "PNG 块 #{} type={} length={}",
                    chunk_count,
                    String::from_utf8_lossy(tag),
                    length
                );

                if tag == IEND.as_slice() {
                    saw_iend = true;
                    state = ScanState::Done;
                }
            }
            ScanState::Done => {}
        }
    }

    let end = reader.position();
    log::debug!(
        "🔍 PNG 扫描完成 - 块数: {} IEND: {} 有效长度: {} 丢弃尾随: {}",
        chunk_count,
        saw_iend,
        end,
        bytes.len() - end
    );

    Ok(end)
}

/// 返回合法 PNG 前缀的借用视图，生命周期与输入缓冲绑定。
pub fn scan_png(bytes: &[u8]) -> Result<&[u8], EmbedError> {
    let len = scan_png_len(bytes)?;
    Ok(&bytes[..len])
}

/// 逐字节比对签名，报告首个不匹配的位置。
fn check_signature(reader: &mut BoundedReader<'_>) -> Result<(), EmbedError> {
    for (index, &expected) in PNG_SIGNATURE.iter().enumerate() {
        let actual = reader.read_u8()?;
        if actual != expected {
            return Err(EmbedError::InvalidSignature {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn detected_mime(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::{scan_png, scan_png_len, PNG_SIGNATURE};
    use crate::embed::EmbedError;

    fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + data.len());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(tag);
        out.extend_from_slice(data);
        out.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        out
    }

    fn minimal_png() -> Vec<u8> {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend(chunk(b"IHDR", &[]));
        png.extend(chunk(b"IEND", &[]));
        png
    }

    #[test]
    fn minimal_png_spans_exactly_32_bytes() {
        let png = minimal_png();
        assert_eq!(scan_png_len(&png), Ok(32));
    }

    #[test]
    fn trailing_bytes_after_iend_are_dropped() {
        let mut png = minimal_png();
        png.extend_from_slice(b"garbage after the end chunk");

        let span = scan_png(&png).expect("scan should succeed");

        assert_eq!(span.len(), 32);
        assert_eq!(&span[28..32], &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn chunk_payload_is_skipped_by_declared_length() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend(chunk(b"IHDR", &[0_u8; 13]));
        png.extend(chunk(b"IDAT", &[7_u8; 100]));
        png.extend(chunk(b"IEND", &[]));
        let expected = png.len();
        png.extend_from_slice(&[0xFF; 5]);

        assert_eq!(scan_png_len(&png), Ok(expected));
    }

    #[test]
    fn first_mismatching_signature_byte_is_reported() {
        let mut png = minimal_png();
        png[0] = 138;

        assert_eq!(
            scan_png_len(&png),
            Err(EmbedError::InvalidSignature {
                index: 0,
                expected: 137,
                actual: 138,
            })
        );
    }

    #[test]
    fn mismatch_in_middle_of_signature_reports_its_index() {
        let mut png = minimal_png();
        png[5] = b'X';

        assert!(matches!(
            scan_png_len(&png),
            Err(EmbedError::InvalidSignature { index: 5, expected: 10, actual: b'X' })
        ));
    }

    #[test]
    fn truncated_signature_is_out_of_range() {
        assert!(matches!(
            scan_png_len(&PNG_SIGNATURE[..5]),
            Err(EmbedError::OutOfRange { .. })
        ));
        assert!(matches!(scan_png_len(&[]), Err(EmbedError::OutOfRange { .. })));
    }

    #[test]
    fn oversized_chunk_length_aborts_scan() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&1000_u32.to_be_bytes());
        png.extend_from_slice(b"IDAT");
        png.extend_from_slice(&[0_u8; 10]);

        assert!(matches!(scan_png_len(&png), Err(EmbedError::OutOfRange { .. })));
    }

    #[test]
    fn exhausted_buffer_without_iend_returns_consumed_span() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend(chunk(b"IHDR", &[1, 2, 3]));

        assert_eq!(scan_png_len(&png), Ok(png.len()));
        assert_eq!(scan_png_len(&PNG_SIGNATURE), Ok(8));
    }

    #[test]
    fn partial_chunk_header_is_out_of_range() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&[0, 0, 0]);

        assert!(matches!(scan_png_len(&png), Err(EmbedError::OutOfRange { .. })));
    }

    #[test]
    fn missing_crc_on_end_chunk_is_out_of_range() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&0_u32.to_be_bytes());
        png.extend_from_slice(b"IEND");

        assert!(matches!(scan_png_len(&png), Err(EmbedError::OutOfRange { .. })));
    }

    #[test]
    fn non_ascii_chunk_tags_are_not_rejected() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend(chunk(&[0xFF, 0x00, 0x01, 0x80], &[9, 9]));
        png.extend(chunk(b"IEND", &[]));

        assert_eq!(scan_png_len(&png), Ok(png.len()));
    }
}
