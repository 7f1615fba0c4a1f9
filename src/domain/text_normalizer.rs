//! 文本清洗
//!
//! 把调用方提交的原始文本清洗成可以安全交给合成服务的文本。
//! 纯函数，无副作用；对自身输出幂等。

use crate::domain::synthesis::SynthesisError;

/// 清洗后的文本
///
/// 不变量: 至少包含一个字母、数字或中日韩文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 需要剔除的控制字符（保留 \t \n \r）
#[inline]
fn is_stripped_control(ch: char) -> bool {
    matches!(
        ch,
        '\u{00}'..='\u{08}' | '\u{0B}'..='\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'..='\u{9F}'
    )
}

/// 弯引号 → 直引号
#[inline]
fn straighten_quote(ch: char) -> char {
    match ch {
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2018}' | '\u{2019}' => '\'',
        other => other,
    }
}

#[inline]
fn is_cjk(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

#[inline]
fn is_readable(ch: char) -> bool {
    ch.is_alphanumeric() || is_cjk(ch)
}

/// 连续空格合并为一个
fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_space = false;

    for ch in text.chars() {
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        result.push(ch);
    }

    result
}

/// 三个及以上连续换行合并为两个
fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = 0usize;

    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            if run > 2 {
                continue;
            }
        } else {
            run = 0;
        }
        result.push(ch);
    }

    result
}

/// 清洗文本
///
/// 步骤（顺序固定）:
/// 1. 剔除控制字符
/// 2. 弯引号、弯撇号转为直引号
/// 3. 换行符统一为 `\n`
/// 4. 连续空格合并
/// 5. 三个及以上连续换行合并为两个
/// 6. 去除首尾空白
///
/// 换行符统一必须在合并换行之前，否则 `\r\n\r\n\r\n` 要清洗两遍才会稳定。
pub fn normalize(raw: &str) -> Result<NormalizedText, SynthesisError> {
    let stripped: String = raw
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .map(straighten_quote)
        .collect();

    let unified = stripped.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = collapse_newlines(&collapse_spaces(&unified));
    let trimmed = collapsed.trim();

    if !trimmed.chars().any(is_readable) {
        return Err(SynthesisError::EmptyContent);
    }

    Ok(NormalizedText(trimmed.to_string()))
}
