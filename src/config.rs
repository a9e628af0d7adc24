//! 哈希配置模块
//!
//! [`HashConfig`] 是调用方传入的配置快照：新密码使用的算法和 bcrypt cost。
//! 库本身不读取任何全局设置，配置的加载方式由调用方决定。
//!
//! ## 示例
//!
//! ```rust
//! use passcompat::config::HashConfig;
//! use passcompat::password::Algorithm;
//!
//! let config = HashConfig::new()
//!     .with_algorithm(Algorithm::Bcrypt)
//!     .with_cost(10);
//! assert!(config.validate().is_ok());
//! ```
//!
//! 也可以从配置文件反序列化，字段名兼容旧设置 `password_encryption` /
//! `password_encryption_cost`：
//!
//! ```rust
//! use passcompat::config::HashConfig;
//! use passcompat::password::Algorithm;
//!
//! let config: HashConfig =
//!     serde_json::from_str(r#"{"password_encryption": "md5salt"}"#).unwrap();
//! assert_eq!(config.algorithm, Algorithm::Md5Salt);
//! assert_eq!(config.cost, 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::password::Algorithm;
use crate::password::strong::{DEFAULT_COST, MAX_COST, MIN_COST};

fn default_cost() -> u32 {
    DEFAULT_COST
}

/// 密码哈希配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// 新密码使用的哈希算法
    #[serde(default, alias = "password_encryption")]
    pub algorithm: Algorithm,

    /// bcrypt 的 cost 参数 (4-31, 默认 12)，其他算法忽略此值
    #[serde(default = "default_cost", alias = "password_encryption_cost")]
    pub cost: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            cost: DEFAULT_COST,
        }
    }
}

impl HashConfig {
    /// 创建默认配置（bcrypt，cost 12）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置哈希算法
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// 设置 bcrypt 的 cost 参数
    ///
    /// # Panics
    ///
    /// 如果 cost 不在 4-31 范围内会 panic
    pub fn with_cost(mut self, cost: u32) -> Self {
        assert!(
            (MIN_COST..=MAX_COST).contains(&cost),
            "bcrypt cost must be between 4 and 31"
        );
        self.cost = cost;
        self
    }

    /// 无盐 MD5 的预设配置
    pub fn md5() -> Self {
        Self::default().with_algorithm(Algorithm::Md5)
    }

    /// 加盐 MD5 的预设配置
    pub fn md5_salt() -> Self {
        Self::default().with_algorithm(Algorithm::Md5Salt)
    }

    /// bcrypt 的预设配置
    pub fn bcrypt(cost: u32) -> Self {
        Self::default()
            .with_algorithm(Algorithm::Bcrypt)
            .with_cost(cost)
    }

    /// 校验配置
    ///
    /// 反序列化得到的配置不经过 [`with_cost`](Self::with_cost) 的检查，使用前应调用此方法。
    /// 非 bcrypt 算法不检查 cost。
    pub fn validate(&self) -> Result<()> {
        if self.algorithm.has_cost() && !(MIN_COST..=MAX_COST).contains(&self.cost) {
            return Err(ConfigError::invalid(
                "cost",
                format!(
                    "bcrypt cost must be between {} and {}, got {}",
                    MIN_COST, MAX_COST, self.cost
                ),
            )
            .into());
        }
        Ok(())
    }
}
