//! 哈希算法标识与格式检测

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::strong;
use crate::error::{ConfigError, Error, Result};

/// MD5 十六进制摘要的长度
pub(crate) const MD5_HEX_LEN: usize = 32;

/// 支持的哈希算法
///
/// 配置文件中使用的标识分别为 `md5`、`md5salt`、`bcrypt`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// 无盐 MD5 - 仅用于验证旧密码
    Md5,

    /// 加盐 MD5，格式为 `<md5(salt + password)>:<salt>` - 仅用于验证旧密码
    #[serde(rename = "md5salt")]
    Md5Salt,

    /// bcrypt - 推荐的默认算法
    Bcrypt,
}

#[allow(clippy::derivable_impls)]
impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Bcrypt
    }
}

impl Algorithm {
    /// 配置中使用的算法标识
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Md5Salt => "md5salt",
            Algorithm::Bcrypt => "bcrypt",
        }
    }

    /// 该算法是否带有 cost 参数
    pub fn has_cost(&self) -> bool {
        matches!(self, Algorithm::Bcrypt)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "md5salt" => Ok(Algorithm::Md5Salt),
            "bcrypt" => Ok(Algorithm::Bcrypt),
            other => Err(ConfigError::invalid(
                "algorithm",
                format!("unknown password encryption '{}'", other),
            )
            .into()),
        }
    }
}

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// 判断哈希由哪种算法生成
///
/// 按顺序匹配：
///
/// 1. 32 位小写十六进制 → [`Algorithm::Md5`]
/// 2. `<32 位小写十六进制>:<至少一个字符>` → [`Algorithm::Md5Salt`]
/// 3. bcrypt 格式 `$2b$<cost>$...` → [`Algorithm::Bcrypt`]
///
/// 其他输入返回 `InvalidFormat` 错误。
///
/// # Example
///
/// ```rust
/// use passcompat::password::{Algorithm, determine_hash_algorithm};
///
/// let md5 = "0cc175b9c0f1b6a831c399e269772661";
/// assert_eq!(determine_hash_algorithm(md5).unwrap(), Algorithm::Md5);
///
/// let salted = "0cc175b9c0f1b6a831c399e269772661:abcde";
/// assert_eq!(determine_hash_algorithm(salted).unwrap(), Algorithm::Md5Salt);
///
/// assert!(determine_hash_algorithm("invalid_hash").is_err());
/// ```
pub fn determine_hash_algorithm(hash: &str) -> Result<Algorithm> {
    if hash.len() == MD5_HEX_LEN && is_lower_hex(hash) {
        return Ok(Algorithm::Md5);
    }

    if let Some((digest, salt)) = hash.split_once(':')
        && digest.len() == MD5_HEX_LEN
        && is_lower_hex(digest)
        && !salt.is_empty()
    {
        return Ok(Algorithm::Md5Salt);
    }

    if strong::is_bcrypt_hash(hash) {
        return Ok(Algorithm::Bcrypt);
    }

    tracing::debug!(len = hash.len(), "unrecognized password hash format");
    Err(Error::invalid_format("unknown hash format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BCRYPT_SAMPLE: &str = "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";

    #[test]
    fn test_detect_md5() {
        assert_eq!(
            determine_hash_algorithm("0cc175b9c0f1b6a831c399e269772661").unwrap(),
            Algorithm::Md5
        );
    }

    #[test]
    fn test_detect_md5_rejects_uppercase() {
        let err = determine_hash_algorithm("0CC175B9C0F1B6A831C399E269772661").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_detect_md5salt() {
        assert_eq!(
            determine_hash_algorithm("0cc175b9c0f1b6a831c399e269772661:abcde").unwrap(),
            Algorithm::Md5Salt
        );
        // 盐值中可以再包含冒号
        assert_eq!(
            determine_hash_algorithm("0cc175b9c0f1b6a831c399e269772661:a:b").unwrap(),
            Algorithm::Md5Salt
        );
    }

    #[test]
    fn test_detect_md5salt_requires_salt() {
        let err = determine_hash_algorithm("0cc175b9c0f1b6a831c399e269772661:").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_detect_bcrypt() {
        assert_eq!(
            determine_hash_algorithm(BCRYPT_SAMPLE).unwrap(),
            Algorithm::Bcrypt
        );
        let php_style = BCRYPT_SAMPLE.replacen("$2b$", "$2y$", 1);
        assert_eq!(
            determine_hash_algorithm(&php_style).unwrap(),
            Algorithm::Bcrypt
        );
    }

    #[test]
    fn test_detect_invalid() {
        for hash in ["invalid_hash", "", "$argon2id$v=19$m=19456,t=2,p=1$abc", "$2b$04$short"] {
            let err = determine_hash_algorithm(hash).unwrap_err();
            assert!(err.is_invalid_format(), "expected InvalidFormat for {:?}", hash);
        }
    }

    #[test]
    fn test_detect_bcrypt_cost_out_of_range() {
        for cost in ["$99$", "$03$"] {
            let hash = BCRYPT_SAMPLE.replacen("$04$", cost, 1);
            let err = determine_hash_algorithm(&hash).unwrap_err();
            assert!(err.is_invalid_format(), "expected InvalidFormat for {}", hash);
        }
    }

    #[test]
    fn test_detect_bcrypt_non_canonical_salt() {
        let hash = format!("$2b$04${}", "z".repeat(53));
        let err = determine_hash_algorithm(&hash).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("md5salt".parse::<Algorithm>().unwrap(), Algorithm::Md5Salt);
        assert_eq!("bcrypt".parse::<Algorithm>().unwrap(), Algorithm::Bcrypt);

        let err = "argon2id".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_algorithm_display_round_trips_through_from_str() {
        for alg in [Algorithm::Md5, Algorithm::Md5Salt, Algorithm::Bcrypt] {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_has_cost() {
        assert!(Algorithm::Bcrypt.has_cost());
        assert!(!Algorithm::Md5.has_cost());
        assert!(!Algorithm::Md5Salt.has_cost());
    }
}
