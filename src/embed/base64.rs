//! # Base64 编码模块
//!
//! 标准 RFC 4648 base64（`+` / `/`，`=` 填充），不换行。
//! 按 3 字节一组拼成 24 位整数，高位在前依次取出 4 个 6 位索引。
//! 末组不足 3 字节时按 0 补齐参与计算，随后用 `=` 覆盖对应输出位。

/// 标准 base64 字母表。
pub static ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// 填充字符。
pub const PAD: u8 = b'=';

/// `n` 字节输入的编码长度：`4 * ceil(n / 3)`。
pub const fn encoded_len(n: usize) -> usize {
    4 * n.div_ceil(3)
}

/// `n` 字节输入末尾的 `=` 个数。
pub const fn padding_len(n: usize) -> usize {
    (3 - n % 3) % 3
}

/// 将字节编码为 base64 字符串。
///
/// # 示例
/// ```rust
/// use clipboard_embed::embed::base64;
///
/// assert_eq!(base64::encode(b"Man"), "TWFu");
/// assert_eq!(base64::encode(b"M"), "TQ==");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    encode_into(data, &mut out);
    out
}

/// 将编码结果追加到 `out` 末尾。
///
/// 调用方预先按 `encoded_len` 预留容量时，这里不会产生重新分配。
pub fn encode_into(data: &[u8], out: &mut String) {
    let start = out.len();
    out.reserve(encoded_len(data.len()));

    for group in data.chunks(3) {
        let a = group[0] as u32;
        let b = group.get(1).copied().unwrap_or(0) as u32;
        let c = group.get(2).copied().unwrap_or(0) as u32;
        let triple = (a << 16) | (b << 8) | c;

        for shift in [18_u32, 12, 6, 0] {
            out.push(ALPHABET[((triple >> shift) & 0x3F) as usize] as char);
        }
    }

    let padding = padding_len(data.len());
    if padding > 0 {
        // 补齐位只影响最后一组的尾部字符，整体替换为 '='
        out.truncate(out.len() - padding);
        out.extend(std::iter::repeat_n(PAD as char, padding));
    }

    debug_assert_eq!(out.len() - start, encoded_len(data.len()));
}
