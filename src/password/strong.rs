//! bcrypt 适配层
//!
//! 哈希、验证与 cost 读取都交给 `bcrypt` crate，这里只负责错误转换和格式检查。

use std::str::FromStr;

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, general_purpose},
};
use bcrypt::HashParts;

use crate::error::{Error, PasswordHashError, Result};

/// bcrypt 允许的最小 cost
pub const MIN_COST: u32 = 4;

/// bcrypt 允许的最大 cost
pub const MAX_COST: u32 = 31;

/// 默认 cost
pub const DEFAULT_COST: u32 = 12;

/// 完整 bcrypt 哈希的长度：`$2b$` + 两位 cost + `$` + 53 字符的盐值与摘要
const BCRYPT_HASH_LEN: usize = 60;

/// 盐值部分的长度（16 字节）
const SALT_B64_LEN: usize = 22;

/// 与 bcrypt crate 解码时使用的引擎一致：bcrypt 字母表、无填充、拒绝非规范的尾部比特
const BCRYPT_B64: GeneralPurpose = GeneralPurpose::new(&alphabet::BCRYPT, general_purpose::NO_PAD);

fn is_bcrypt_base64(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'/'
}

fn has_bcrypt_shape(bytes: &[u8]) -> bool {
    bytes.len() == BCRYPT_HASH_LEN
        && bytes[0] == b'$'
        && bytes[1] == b'2'
        && matches!(bytes[2], b'a' | b'b' | b'x' | b'y')
        && bytes[3] == b'$'
        && bytes[4].is_ascii_digit()
        && bytes[5].is_ascii_digit()
        && bytes[6] == b'$'
        && bytes[7..].iter().all(|&b| is_bcrypt_base64(b))
}

/// 检查字符串是否为 bcrypt crate 能够验证的哈希
///
/// 接受 `$2a$`、`$2b$`、`$2x$`、`$2y$` 前缀；cost 必须在 4-31 之间，
/// 盐值和摘要必须是规范的 bcrypt base64 编码。
pub fn is_bcrypt_hash(hash: &str) -> bool {
    if !has_bcrypt_shape(hash.as_bytes()) {
        return false;
    }

    if !cost(hash).is_ok_and(|c| (MIN_COST..=MAX_COST).contains(&c)) {
        return false;
    }

    let (salt, digest) = hash[7..].split_at(SALT_B64_LEN);
    BCRYPT_B64.decode(salt).is_ok() && BCRYPT_B64.decode(digest).is_ok()
}

/// 使用指定 cost 哈希密码
pub fn hash(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| {
        Error::PasswordHash(PasswordHashError::HashFailed(format!(
            "bcrypt hash failed: {}",
            e
        )))
    })
}

/// 验证密码，密码错误时返回 `Ok(false)`
pub fn verify(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).map_err(|e| {
        Error::PasswordHash(PasswordHashError::InvalidFormat(format!(
            "bcrypt verify failed: {}",
            e
        )))
    })
}

/// 读取哈希中记录的 cost
///
/// # Example
///
/// ```rust
/// use passcompat::password::strong;
///
/// let hash = strong::hash("my_password", 5).unwrap();
/// assert_eq!(strong::cost(&hash).unwrap(), 5);
/// ```
pub fn cost(hash: &str) -> Result<u32> {
    HashParts::from_str(hash)
        .map(|parts| parts.get_cost())
        .map_err(|e| {
            Error::PasswordHash(PasswordHashError::InvalidFormat(format!(
                "invalid bcrypt hash: {}",
                e
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash("test_password_123", MIN_COST).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(is_bcrypt_hash(&hash));

        assert!(verify("test_password_123", &hash).unwrap());
        assert!(!verify("wrong_password", &hash).unwrap());
        assert!(!verify("", &hash).unwrap());
    }

    #[test]
    fn test_cost_introspection() {
        let hash = hash("test", 5).unwrap();
        assert_eq!(cost(&hash).unwrap(), 5);
    }

    #[test]
    fn test_cost_of_known_hash() {
        let known = "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";
        assert_eq!(cost(known).unwrap(), 4);
    }

    #[test]
    fn test_cost_of_garbage() {
        let err = cost("invalid_hash").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_hash_rejects_out_of_range_cost() {
        let err = hash("test", MIN_COST - 1).unwrap_err();
        assert!(matches!(
            err,
            Error::PasswordHash(PasswordHashError::HashFailed(_))
        ));
    }

    #[test]
    fn test_is_bcrypt_hash_shape() {
        let known = "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";
        assert!(is_bcrypt_hash(known));
        assert!(is_bcrypt_hash(&known.replacen("$2b$", "$2a$", 1)));
        assert!(is_bcrypt_hash(&known.replacen("$2b$", "$2y$", 1)));

        assert!(!is_bcrypt_hash(&known.replacen("$2b$", "$2c$", 1)));
        assert!(!is_bcrypt_hash(&known.replacen("$04$", "$x4$", 1)));
        assert!(!is_bcrypt_hash(&known[..59]));
        assert!(!is_bcrypt_hash(&format!("{}!", &known[..59])));
        assert!(!is_bcrypt_hash("invalid_hash"));
    }

    #[test]
    fn test_is_bcrypt_hash_rejects_unusable_cost() {
        let known = "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";
        for bad in ["$00$", "$03$", "$32$", "$99$"] {
            assert!(!is_bcrypt_hash(&known.replacen("$04$", bad, 1)), "{}", bad);
        }
        assert!(is_bcrypt_hash(&known.replacen("$04$", "$31$", 1)));
    }

    #[test]
    fn test_is_bcrypt_hash_rejects_non_canonical_base64() {
        // 盐值最后一个字符的低 4 位不为零
        let bad_salt = format!("$2b$04${}", "z".repeat(53));
        assert!(!is_bcrypt_hash(&bad_salt));
        assert!(verify("test", &bad_salt).is_err());

        // 摘要最后一个字符的低 2 位不为零
        let known = "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";
        let bad_digest = format!("{}f", &known[..59]);
        assert!(!is_bcrypt_hash(&bad_digest));
    }

    #[test]
    fn test_generated_hashes_pass_detection() {
        for cost in [MIN_COST, 5] {
            let hash = hash("test", cost).unwrap();
            assert!(is_bcrypt_hash(&hash));
        }
    }
}
