// base64 编码器性质测试，以 base64 crate 作为 RFC 4648 参照解码器
use base64::{engine::general_purpose, Engine as _};
use clipboard_embed::embed::base64::{encode, encoded_len, padding_len};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_of_encode_is_identity(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data);
        let decoded = general_purpose::STANDARD.decode(&encoded).expect("valid base64");
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn length_and_padding_follow_group_arithmetic(n in 0_usize..2048) {
        let data = vec![0x5A_u8; n];
        let encoded = encode(&data);
        let trailing = encoded.bytes().rev().take_while(|&b| b == b'=').count();

        prop_assert_eq!(encoded.len(), 4 * n.div_ceil(3));
        prop_assert_eq!(encoded.len(), encoded_len(n));
        prop_assert_eq!(trailing, (3 - n % 3) % 3);
        prop_assert_eq!(trailing, padding_len(n));
    }

    #[test]
    fn matches_reference_encoder(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(encode(&data), general_purpose::STANDARD.encode(&data));
    }
}

#[test]
fn textbook_vectors() {
    assert_eq!(encode(b"Man"), "TWFu");
    assert_eq!(encode(b"Ma"), "TWE=");
    assert_eq!(encode(b"M"), "TQ==");
    assert_eq!(encode(b""), "");
}
