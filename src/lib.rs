//! # passcompat
//!
//! 兼容多种历史格式的密码哈希库。
//!
//! ## 功能特性
//!
//! - **密码哈希**: 新密码按配置使用 bcrypt（或旧式 MD5 / 加盐 MD5）哈希
//! - **密码验证**: 自动识别哈希格式，旧系统的哈希同样可以验证
//! - **重新哈希判断**: 算法或 bcrypt cost 变化时提示重新生成哈希
//! - **盐值生成**: 为加盐 MD5 生成随机盐值
//!
//! 所有操作都是纯函数：配置通过 [`HashConfig`] 显式传入，库内没有全局状态。
//!
//! ## 密码哈希示例
//!
//! ```rust
//! use passcompat::{HashConfig, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HashConfig::bcrypt(10));
//!
//! // 哈希密码
//! let hash = hasher.hash("my_secure_password").unwrap();
//!
//! // 验证密码
//! assert!(hasher.verify("my_secure_password", &hash).unwrap());
//! assert!(!hasher.needs_rehash(&hash).unwrap());
//! ```
//!
//! ## 旧格式哈希
//!
//! ```rust
//! use passcompat::password::{extract_salt, mix_salt, verify_password};
//!
//! let hash = mix_salt("abcde", "test_password");
//! assert_eq!(extract_salt(&hash), "abcde");
//! assert!(verify_password("test_password", &hash).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod password;
pub mod random;

pub use config::HashConfig;
pub use error::{Error, Result};

// ============================================================================
// 密码相关导出
// ============================================================================

pub use password::{
    Algorithm, PasswordHasher, determine_hash_algorithm, extract_salt, gen_mix_salt,
    hash_password, mix_salt, verify_password,
};

// ============================================================================
// 随机数生成函数导出
// ============================================================================

pub use random::{constant_time_compare, constant_time_compare_str, generate_salt};
