//! 密码哈希实现
//!
//! 提供密码哈希、验证以及重新哈希判断的核心功能。

use super::algorithm::{Algorithm, determine_hash_algorithm};
use super::{legacy, strong};
use crate::config::HashConfig;
use crate::error::{PasswordHashError, Result};
use crate::random::constant_time_compare_str;

/// 密码哈希器
///
/// 持有一份 [`HashConfig`] 快照。新密码按配置的算法哈希，验证时则根据哈希本身的格式
/// 选择算法，因此旧格式的哈希始终可以验证。
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    config: HashConfig,
}

impl PasswordHasher {
    /// 创建新的密码哈希器
    ///
    /// 不校验配置。反序列化得到的配置应先调用 [`HashConfig::validate`]，
    /// 或改用 [`try_new`](Self::try_new)；否则 cost 越界时 `hash` 会始终失败。
    ///
    /// # Example
    ///
    /// ```rust
    /// use passcompat::config::HashConfig;
    /// use passcompat::password::PasswordHasher;
    ///
    /// let hasher = PasswordHasher::new(HashConfig::bcrypt(10));
    /// ```
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// 校验配置后创建密码哈希器
    ///
    /// # Example
    ///
    /// ```rust
    /// use passcompat::config::HashConfig;
    /// use passcompat::password::PasswordHasher;
    ///
    /// let config: HashConfig =
    ///     serde_json::from_str(r#"{"algorithm": "bcrypt", "cost": 3}"#).unwrap();
    /// assert!(PasswordHasher::try_new(config).is_err());
    /// ```
    pub fn try_new(config: HashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// 当前配置
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// 替换配置
    pub fn with_config(mut self, config: HashConfig) -> Self {
        self.config = config;
        self
    }

    /// 哈希密码
    ///
    /// # Arguments
    ///
    /// * `password` - 要哈希的明文密码
    ///
    /// # Returns
    ///
    /// 返回哈希后的密码字符串
    ///
    /// # Example
    ///
    /// ```rust
    /// use passcompat::config::HashConfig;
    /// use passcompat::password::PasswordHasher;
    ///
    /// let hasher = PasswordHasher::new(HashConfig::md5());
    /// let hash = hasher.hash("a").unwrap();
    /// assert_eq!(hash, "0cc175b9c0f1b6a831c399e269772661");
    /// ```
    pub fn hash(&self, password: &str) -> Result<String> {
        tracing::debug!(algorithm = %self.config.algorithm, "hashing password");

        match self.config.algorithm {
            Algorithm::Md5 => Ok(legacy::md5_hex(password)),
            Algorithm::Md5Salt => Ok(legacy::gen_mix_salt(password)),
            Algorithm::Bcrypt => strong::hash(password, self.config.cost),
        }
    }

    /// 验证密码
    ///
    /// 根据哈希格式自动选择算法，与当前配置无关。
    ///
    /// # Returns
    ///
    /// 如果密码正确返回 `Ok(true)`，密码错误返回 `Ok(false)`；
    /// 哈希格式无法识别时返回 `InvalidFormat` 错误
    ///
    /// # Example
    ///
    /// ```rust
    /// use passcompat::config::HashConfig;
    /// use passcompat::password::PasswordHasher;
    ///
    /// let hasher = PasswordHasher::new(HashConfig::md5_salt());
    /// let hash = hasher.hash("my_password").unwrap();
    ///
    /// assert!(hasher.verify("my_password", &hash).unwrap());
    /// assert!(!hasher.verify("wrong_password", &hash).unwrap());
    /// ```
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        verify_password(password, hash)
    }

    /// 检查哈希是否需要重新生成
    ///
    /// 哈希算法与当前配置不同时需要重新生成；两者都是 bcrypt 时比较 cost，
    /// 只要不相等（包括降低 cost）就需要重新生成。
    ///
    /// # Example
    ///
    /// ```rust
    /// use passcompat::config::HashConfig;
    /// use passcompat::password::PasswordHasher;
    ///
    /// let md5_hash = PasswordHasher::new(HashConfig::md5()).hash("pw").unwrap();
    ///
    /// let hasher = PasswordHasher::new(HashConfig::bcrypt(10));
    /// assert!(hasher.needs_rehash(&md5_hash).unwrap());
    /// assert!(hasher.needs_rehash("invalid_hash").is_err());
    /// ```
    pub fn needs_rehash(&self, hash: &str) -> Result<bool> {
        let detected = determine_hash_algorithm(hash)?;
        let configured = self.config.algorithm;

        let needs = match (detected, configured) {
            (Algorithm::Bcrypt, Algorithm::Bcrypt) => {
                let cost = strong::cost(hash)?;
                if cost != self.config.cost {
                    tracing::debug!(
                        hash_cost = cost,
                        configured_cost = self.config.cost,
                        "bcrypt cost changed"
                    );
                }
                cost != self.config.cost
            }
            (Algorithm::Md5, Algorithm::Md5) | (Algorithm::Md5Salt, Algorithm::Md5Salt) => false,
            (Algorithm::Md5 | Algorithm::Md5Salt | Algorithm::Bcrypt, _) => {
                tracing::debug!(
                    detected = %detected,
                    configured = %configured,
                    "hash algorithm differs from configuration"
                );
                true
            }
        };

        Ok(needs)
    }

    /// 验证密码，并在需要时生成新哈希
    ///
    /// 登录时使用：密码正确且 [`needs_rehash`](Self::needs_rehash) 为真时返回
    /// `Ok(Some(新哈希))`，调用方负责保存；不需要重新哈希时返回 `Ok(None)`。
    /// 密码错误返回 `VerifyFailed` 错误。
    ///
    /// # Example
    ///
    /// ```rust
    /// use passcompat::config::HashConfig;
    /// use passcompat::password::PasswordHasher;
    ///
    /// let old_hash = PasswordHasher::new(HashConfig::md5()).hash("pw").unwrap();
    ///
    /// let hasher = PasswordHasher::new(HashConfig::bcrypt(4));
    /// let new_hash = hasher.verify_and_upgrade("pw", &old_hash).unwrap().unwrap();
    /// assert!(new_hash.starts_with("$2"));
    /// assert_eq!(hasher.verify_and_upgrade("pw", &new_hash).unwrap(), None);
    /// ```
    pub fn verify_and_upgrade(&self, password: &str, hash: &str) -> Result<Option<String>> {
        if !self.verify(password, hash)? {
            return Err(PasswordHashError::VerifyFailed.into());
        }

        if self.needs_rehash(hash)? {
            tracing::debug!(algorithm = %self.config.algorithm, "upgrading password hash");
            return self.hash(password).map(Some);
        }

        Ok(None)
    }
}

// ============================================================================
// 便捷函数
// ============================================================================

/// 使用默认配置（bcrypt，cost 12）哈希密码
///
/// # Example
///
/// ```rust
/// use passcompat::password::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    PasswordHasher::default().hash(password)
}

/// 验证密码是否匹配哈希
///
/// 自动检测哈希格式（MD5 / 加盐 MD5 / bcrypt）
///
/// # Returns
///
/// 如果密码正确返回 `Ok(true)`，密码错误返回 `Ok(false)`
///
/// # Example
///
/// ```rust
/// use passcompat::password::verify_password;
///
/// let hash = "0cc175b9c0f1b6a831c399e269772661";
/// assert!(verify_password("a", hash).unwrap());
/// assert!(!verify_password("b", hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    match determine_hash_algorithm(hash)? {
        Algorithm::Md5 => Ok(constant_time_compare_str(
            hash,
            &legacy::md5_hex(password),
        )),
        Algorithm::Md5Salt => {
            let salt = legacy::extract_salt(hash);
            Ok(constant_time_compare_str(
                hash,
                &legacy::mix_salt(&salt, password),
            ))
        }
        Algorithm::Bcrypt => strong::verify(password, hash),
    }
}
