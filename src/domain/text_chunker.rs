//! 文本分块器
//!
//! 把清洗后的文本按句子边界切成不超过最大字符数的块，
//! 每块单独提交给合成服务。

use crate::domain::NormalizedText;

/// 默认单块最大字符数
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1000;

/// 分块后的文本片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub content: String,
}

impl Chunk {
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// 检查是否为句末标点（`!` `?` 与 `.` 等价，全角句末标点同样处理）
#[inline]
fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '。' | '！' | '？')
}

/// 按句末标点切句
///
/// 每句去除首尾空白后统一以 `.` 结尾，原句末标点不保留；
/// 连续标点产生的空句被跳过。
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let body = current.trim();
        if !body.is_empty() {
            sentences.push(format!("{}.", body));
        }
        current.clear();
    };

    for ch in text.chars() {
        if is_sentence_terminator(ch) {
            flush(&mut current);
        } else {
            current.push(ch);
        }
    }
    flush(&mut current);

    sentences
}

/// 对文本进行分块
///
/// 分块策略：
/// 1. 文本不超过 `max_chars` 时整体作为一块
/// 2. 否则切句（句末统一为 `.`），按顺序贪心装入缓冲区（句间以空格分隔）
/// 3. 装入下一句会超过 `max_chars` 时先把缓冲区输出为一块
///
/// 单句本身超过 `max_chars` 时不再细分，独占一块输出。
pub fn chunk_text(text: &NormalizedText, max_chars: usize) -> Vec<Chunk> {
    let text = text.as_str();

    if text.chars().count() <= max_chars {
        return vec![Chunk {
            index: 0,
            content: text.to_string(),
        }];
    }

    let mut contents: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for sentence in split_sentences(text) {
        let sentence_chars = sentence.chars().count();

        if buffer_chars > 0 && buffer_chars + sentence_chars > max_chars {
            contents.push(buffer.trim_end().to_string());
            buffer.clear();
            buffer_chars = 0;
        }

        buffer.push_str(&sentence);
        buffer.push(' ');
        buffer_chars += sentence_chars + 1;
    }

    let rest = buffer.trim_end();
    if !rest.is_empty() {
        contents.push(rest.to_string());
    }

    contents
        .into_iter()
        .enumerate()
        .map(|(index, content)| Chunk { index, content })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize;

    fn normalized(text: &str) -> NormalizedText {
        normalize(text).unwrap()
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunks = chunk_text(&normalized("Hello world."), DEFAULT_MAX_CHUNK_CHARS);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].content, "Hello world.");
    }

    #[test]
    fn test_short_text_is_kept_verbatim() {
        // 未超限时不切句，也不改写标点
        let chunks = chunk_text(&normalized("Really?! Yes... ok"), 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Really?! Yes... ok");
    }

    #[test]
    fn test_long_text_splits_into_bounded_chunks() {
        // 49 句 49 字符 + 1 句 50 字符，空格分隔，共 2500 字符
        let mut sentences: Vec<String> = (0..49).map(|_| format!("{}.", "a".repeat(48))).collect();
        sentences.push(format!("{}.", "b".repeat(49)));
        let text = sentences.join(" ");
        assert_eq!(text.chars().count(), 2500);

        let chunks = chunk_text(&normalized(&text), 1000);

        assert_eq!(chunks.len(), 3);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert!(chunk.char_count() <= 1000, "chunk {} has {} chars", i, chunk.char_count());
        }
        assert_eq!(chunks[0].char_count(), 999);
        assert_eq!(chunks[1].char_count(), 999);
        assert!(chunks[2].content.ends_with(&format!("{}.", "b".repeat(49))));

        // 顺序保持：拼回去就是原文
        let joined: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(joined.join(" "), text);
    }

    #[test]
    fn test_reassembly_keeps_every_sentence() {
        let text = "First one! Second one? Third one. Fourth without end";
        let chunks = chunk_text(&normalized(text), 20);

        let rejoined: Vec<String> = chunks
            .iter()
            .flat_map(|c| split_sentences(&c.content))
            .collect();

        assert_eq!(rejoined, split_sentences(text));
        assert_eq!(
            rejoined,
            vec!["First one.", "Second one.", "Third one.", "Fourth without end."]
        );
    }

    #[test]
    fn test_exclamation_and_question_become_periods() {
        let chunks = chunk_text(&normalized("One thing. Two things! Three?"), 12);

        assert_eq!(
            chunks.iter().map(|c| c.content.as_str()).collect::<Vec<_>>(),
            vec!["One thing.", "Two things.", "Three."]
        );
    }

    #[test]
    fn test_consecutive_delimiters_are_skipped() {
        let text = "Wait... what?! Fine.";
        assert_eq!(split_sentences(text), vec!["Wait.", "what.", "Fine."]);

        let chunks = chunk_text(&normalized(text), 10);
        assert_eq!(
            chunks.iter().map(|c| c.content.as_str()).collect::<Vec<_>>(),
            vec!["Wait.", "what.", "Fine."]
        );
    }

    #[test]
    fn test_oversized_sentence_is_not_split() {
        let long_sentence = format!("{}.", "x".repeat(150));
        let text = format!("Short one. {} Tail.", long_sentence);
        let chunks = chunk_text(&normalized(&text), 100);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].content, "Short one.");
        assert_eq!(chunks[1].content, long_sentence);
        assert_eq!(chunks[1].char_count(), 151);
        assert_eq!(chunks[2].content, "Tail.");
    }

    #[test]
    fn test_cjk_terminators_split() {
        let text = "第一句话。第二句话！第三句话？";
        let chunks = chunk_text(&normalized(text), 11);

        assert_eq!(
            chunks.iter().map(|c| c.content.as_str()).collect::<Vec<_>>(),
            vec!["第一句话. 第二句话.", "第三句话."]
        );
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let text = normalized(&"Sentence number one. Another sentence here! ".repeat(40));
        assert_eq!(chunk_text(&text, 200), chunk_text(&text, 200));
    }
}
