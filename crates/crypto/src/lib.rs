//! # Devvio Proxy ハッシュ処理
//!
//! アセット発行リクエストに付与するチェックサムを計算する。
//!
//! ## アルゴリズム
//! | 用途 | アルゴリズム |
//! |------|------------|
//! | ハッシュ | SHA-256 |
//! | エンコード | 小文字16進数（64文字） |
//!
//! チェックサムはサーバー秘密鍵を入力に含むため、クライアントに鍵を渡さずに
//! 「鍵の保持者が発行したリクエスト」であることをDevvio APIに示せる。

use std::fmt::Display;

use sha2::{Digest, Sha256};

/// SHA-256ハッシュ計算。
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256ハッシュを小文字16進数で返す。
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// アセット発行トランザクションのチェックサムを計算する。
///
/// `checksum = hex(SHA-256(coin_id + api_key + amount + client_id))`
///
/// 各値は `Display` の文字列形式で区切り文字なしに連結する。
/// 入力の存在検証は呼び出し側の責務（欠落値もそのままハッシュされてしまう）。
pub fn transaction_checksum(
    coin_id: impl Display,
    api_key: &str,
    amount: impl Display,
    client_id: impl Display,
) -> String {
    let combined = format!("{coin_id}{api_key}{amount}{client_id}");
    sha256_hex(combined.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex_64(s: &str) -> bool {
        s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// 空入力のSHA-256が既知の値と一致することを確認
    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    /// 連結文字列のSHA-256と一致することを確認
    #[test]
    fn test_checksum_known_vector() {
        let checksum = transaction_checksum("42", "s3cr3t", 100, "abc");
        assert_eq!(
            checksum,
            "029d02eedc44a4ec92d9411511c635d0b2afeccc9a8fc7afa03ae9497558af62"
        );
        assert_eq!(checksum, sha256_hex(b"42s3cr3t100abc"));
    }

    /// 同一入力なら常に同一のチェックサムになる
    #[test]
    fn test_checksum_deterministic() {
        let a = transaction_checksum(7, "k", 12.5, "client-9");
        let b = transaction_checksum(7, "k", 12.5, "client-9");
        assert_eq!(a, b);
        assert_eq!(
            a,
            "3431267b05ec219b715f218b042f8c248ff3674abb353799d50f4f760f786dbf"
        );
    }

    /// 1フィールドだけ異なる入力でチェックサムが変わることを確認
    #[test]
    fn test_checksum_near_duplicates_differ() {
        let c1 = transaction_checksum("1", "key", 100, "c1");
        let c2 = transaction_checksum("1", "key", 100, "c2");
        assert_ne!(c1, c2);
        assert_eq!(
            c1,
            "8e893393f9a75af6acc8835fd14598b4d938306c8d3246c8569a2b33f58304b3"
        );
        assert_eq!(
            c2,
            "f993c847a3f0bae58d4078904b47472aaff4db94b6d19bdef7d5f37dc80b73b4"
        );

        let other_key = transaction_checksum("1", "key2", 100, "c1");
        assert_ne!(c1, other_key);
    }

    /// 出力は常に64文字の小文字16進数
    #[test]
    fn test_checksum_format() {
        for (coin, key, amount, client) in [
            ("", "", "", ""),
            ("1", "key", "100", "c1"),
            ("ＣＯＩＮ", "秘密鍵", "0.000001", "クライアント"),
        ] {
            let checksum = transaction_checksum(coin, key, amount, client);
            assert!(is_lower_hex_64(&checksum), "不正な形式: {checksum}");
        }
    }
}
