//! 随机盐值生成模块
//!
//! 为旧式 salted MD5 哈希生成盐值，并提供常量时间字符串比较。
//!
//! 盐值来自线程本地、由操作系统播种的通用随机数生成器。该方案本身是
//! 旧格式，只要求在 74 个字符的字符集上均匀分布且不可轻易预测。

use rand::Rng;

/// 盐值字符集：小写字母、大写字母、数字以及 `@#$%^*()_-!`，共 74 个字符
pub const SALT_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890@#$%^*()_-!";

/// 生成指定长度的随机盐值
///
/// 长度小于等于 0 时返回空字符串，不会报错。
///
/// # Arguments
///
/// * `length` - 盐值长度（字符数）
///
/// # Example
///
/// ```rust
/// use passcompat::random::{generate_salt, SALT_CHARSET};
///
/// let salt = generate_salt(10);
/// assert_eq!(salt.len(), 10);
/// assert!(salt.bytes().all(|b| SALT_CHARSET.contains(&b)));
///
/// assert_eq!(generate_salt(0), "");
/// assert_eq!(generate_salt(-5), "");
/// ```
pub fn generate_salt(length: i64) -> String {
    generate_salt_with(&mut rand::rng(), length)
}

/// 使用给定的随机数生成器生成盐值
///
/// 测试中可以传入固定种子的 `StdRng` 以得到确定的结果。
///
/// # Example
///
/// ```rust
/// use passcompat::random::generate_salt_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let a = generate_salt_with(&mut StdRng::seed_from_u64(7), 8);
/// let b = generate_salt_with(&mut StdRng::seed_from_u64(7), 8);
/// assert_eq!(a, b);
/// ```
pub fn generate_salt_with<R: Rng>(rng: &mut R, length: i64) -> String {
    if length <= 0 {
        return String::new();
    }

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..SALT_CHARSET.len());
            SALT_CHARSET[idx] as char
        })
        .collect()
}

/// 常量时间比较两个字节切片
///
/// 用于防止时序攻击
///
/// # Example
///
/// ```rust
/// use passcompat::random::constant_time_compare;
///
/// assert!(constant_time_compare(b"secret_token", b"secret_token"));
/// assert!(!constant_time_compare(b"secret_token", b"other_token!"));
/// ```
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}

/// 常量时间比较两个字符串
pub fn constant_time_compare_str(a: &str, b: &str) -> bool {
    constant_time_compare(a.as_bytes(), b.as_bytes())
}
