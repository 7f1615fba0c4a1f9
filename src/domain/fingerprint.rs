//! 缓存指纹
//!
//! 指纹 = md5(text|voice|rate|pitch) 的小写十六进制

/// 指纹各字段之间的分隔符
pub const KEY_DELIMITER: char = '|';

/// 内容指纹（32 位小写十六进制）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 缓存文件名: `<fingerprint>.<ext>`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }

    /// 日志里使用的短前缀
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成缓存指纹
///
/// 查找和写入必须使用同一份文本表示；网关统一使用调用方提交的原始文本。
pub fn fingerprint(text: &str, voice: &str, rate: &str, pitch: &str) -> Fingerprint {
    let key = format!(
        "{text}{d}{voice}{d}{rate}{d}{pitch}",
        d = KEY_DELIMITER
    );
    let digest = md5::compute(key.as_bytes());
    Fingerprint(format!("{:x}", digest))
}
