//! # 有界读取器模块
//!
//! ## 设计思路
//!
//! `BoundedReader` 以借用方式包装一段只读字节，维护 `position` 与 `limit` 两个游标，
//! 始终满足 `position <= limit <= buf.len()`。
//!
//! ## 实现思路
//!
//! - 所有读取先做边界检查，失败时返回 `EmbedError::OutOfRange`，游标保持不动。
//! - 多字节整数固定按大端（网络字节序）解释，与宿主字节序无关。
//! - `read_span` 返回生命周期为 `'a` 的切片，不拷贝数据，也不可能比原缓冲活得更久。

use super::EmbedError;

/// 带位置/上限模型的只读字节游标。
///
/// # 示例
/// ```rust
/// use clipboard_embed::embed::BoundedReader;
///
/// let data = [0x00, 0x01, 0x02, 0x03, 0x04];
/// let mut reader = BoundedReader::new(&data);
///
/// assert_eq!(reader.read_u8()?, 0x00);
/// assert_eq!(reader.read_u32_be()?, 0x0102_0304);
/// assert!(!reader.has_remaining());
/// # Ok::<(), clipboard_embed::embed::EmbedError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundedReader<'a> {
    buf: &'a [u8],
    position: usize,
    limit: usize,
}

impl<'a> BoundedReader<'a> {
    /// 以整个缓冲长度作为上限创建读取器。
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            position: 0,
            limit: buf.len(),
        }
    }

    /// 以显式上限创建读取器。
    ///
    /// `limit` 超过缓冲长度时返回 `OutOfRange`。
    pub fn with_limit(buf: &'a [u8], limit: usize) -> Result<Self, EmbedError> {
        if limit > buf.len() {
            return Err(EmbedError::OutOfRange {
                position: 0,
                requested: limit,
                remaining: buf.len(),
            });
        }

        Ok(Self {
            buf,
            position: 0,
            limit,
        })
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 重新定位游标，允许范围为 `[0, limit]`。
    pub fn set_position(&mut self, position: usize) -> Result<(), EmbedError> {
        if position > self.limit {
            return Err(EmbedError::OutOfRange {
                position: self.position,
                requested: position - self.position,
                remaining: self.remaining(),
            });
        }

        self.position = position;
        Ok(())
    }

    /// 向后跳过 `length` 字节，不解释其内容。
    pub fn skip(&mut self, length: usize) -> Result<(), EmbedError> {
        self.ensure(length)?;
        self.position += length;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, EmbedError> {
        self.ensure(1)?;
        let value = self.buf[self.position];
        self.position += 1;
        Ok(value)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, EmbedError> {
        let bytes = self.read_array::<2>()?;
        Ok(u16::from_be_bytes(bytes))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, EmbedError> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// 返回接下来 `length` 字节的零拷贝视图，并前移游标。
    pub fn read_span(&mut self, length: usize) -> Result<&'a [u8], EmbedError> {
        self.ensure(length)?;
        let start = self.position;
        let span = &self.buf[start..start + length];
        self.position += length;
        Ok(span)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], EmbedError> {
        let span = self.read_span(N)?;
        let mut out = [0_u8; N];
        out.copy_from_slice(span);
        Ok(out)
    }

    /// 边界检查：必须在任何游标修改之前调用。
    fn ensure(&self, requested: usize) -> Result<(), EmbedError> {
        let remaining = self.remaining();
        if requested > remaining {
            return Err(EmbedError::OutOfRange {
                position: self.position,
                requested,
                remaining,
            });
        }
        Ok(())
    }
}
