//! 旧式 MD5 / 加盐 MD5 哈希
//!
//! 这两种格式只为兼容旧数据而保留，新密码不应使用。
//!
//! 加盐格式为 `<md5(salt + password)>:<salt>`，摘要在前，盐值以明文附在冒号之后。

use md5::{Digest, Md5};

use crate::random::generate_salt;

/// 新生成的加盐 MD5 哈希使用的盐值长度
pub const DEFAULT_SALT_LENGTH: i64 = 5;

/// 计算 MD5 摘要，返回 32 位小写十六进制字符串
///
/// # Example
///
/// ```rust
/// use passcompat::password::legacy::md5_hex;
///
/// assert_eq!(md5_hex("a"), "0cc175b9c0f1b6a831c399e269772661");
/// ```
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", Md5::digest(input.as_bytes()))
}

/// 用给定盐值生成加盐 MD5 哈希
///
/// 对 `salt + password` 计算 MD5，返回 `<digest>:<salt>`。盐值为空时冒号仍然保留。
///
/// # Example
///
/// ```rust
/// use passcompat::password::legacy::{md5_hex, mix_salt};
///
/// let hash = mix_salt("abcde", "test_password");
/// assert_eq!(hash, format!("{}:abcde", md5_hex("abcdetest_password")));
/// ```
pub fn mix_salt(salt: &str, password: &str) -> String {
    let mut input = String::with_capacity(salt.len() + password.len());
    input.push_str(salt);
    input.push_str(password);
    format!("{}:{}", md5_hex(&input), salt)
}

/// 生成新的 5 字符盐值，再调用 [`mix_salt`]
pub fn gen_mix_salt(password: &str) -> String {
    let salt = generate_salt(DEFAULT_SALT_LENGTH);
    mix_salt(&salt, password)
}

/// 从加盐哈希中取出盐值
///
/// 返回第一个冒号之后的全部内容；没有冒号时返回空字符串。该函数对任意输入都不会报错。
///
/// # Example
///
/// ```rust
/// use passcompat::password::legacy::extract_salt;
///
/// assert_eq!(extract_salt("0cc175b9c0f1b6a831c399e269772661:abcde"), "abcde");
/// assert_eq!(extract_salt("0cc175b9c0f1b6a831c399e269772661"), "");
/// assert_eq!(extract_salt("invalid_hash"), "");
/// ```
pub fn extract_salt(hash: &str) -> String {
    hash.split_once(':')
        .map(|(_, salt)| salt.to_string())
        .unwrap_or_default()
}
