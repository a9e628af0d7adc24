//! 密码哈希模块
//!
//! 新密码使用 bcrypt 哈希，同时可以验证旧系统留下的 MD5 和加盐 MD5 哈希。
//!
//! ## 支持的算法
//!
//! - **bcrypt** (推荐): 自带盐值、cost 可调的哈希算法
//! - **md5salt**: `<md5(salt + password)>:<salt>`，仅用于兼容旧数据
//! - **md5**: 无盐 MD5，仅用于兼容旧数据
//!
//! ## 示例
//!
//! ### 使用默认配置
//!
//! ```rust
//! use passcompat::password::{hash_password, verify_password};
//!
//! let hash = hash_password("my_secure_password").unwrap();
//!
//! let is_valid = verify_password("my_secure_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ### 迁移旧哈希
//!
//! ```rust
//! use passcompat::config::HashConfig;
//! use passcompat::password::{Algorithm, PasswordHasher, determine_hash_algorithm};
//!
//! let legacy = "0cc175b9c0f1b6a831c399e269772661";
//! assert_eq!(determine_hash_algorithm(legacy).unwrap(), Algorithm::Md5);
//!
//! let hasher = PasswordHasher::new(HashConfig::bcrypt(4));
//! assert!(hasher.verify("a", legacy).unwrap());
//! assert!(hasher.needs_rehash(legacy).unwrap());
//! ```

mod algorithm;
mod hasher;
pub mod legacy;
pub mod strong;

pub use algorithm::{Algorithm, determine_hash_algorithm};
pub use hasher::{PasswordHasher, hash_password, verify_password};
pub use legacy::{extract_salt, gen_mix_salt, mix_salt};
