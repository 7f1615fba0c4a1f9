//! 按语言选择默认音色

/// 未指定音色和语言时使用的音色
pub const FALLBACK_VOICE: &str = "zh-CN-XiaoxiaoNeural";

/// 语言标签 → 默认音色
const DEFAULT_VOICES: &[(&str, &str)] = &[
    ("zh", "zh-CN-XiaoxiaoNeural"),
    ("zh-CN", "zh-CN-XiaoxiaoNeural"),
    ("zh-TW", "zh-TW-HsiaoChenNeural"),
    ("en", "en-US-AriaNeural"),
    ("en-US", "en-US-AriaNeural"),
    ("en-GB", "en-GB-SoniaNeural"),
    ("ja", "ja-JP-NanamiNeural"),
    ("ko", "ko-KR-SunHiNeural"),
    ("es", "es-ES-ElviraNeural"),
    ("fr", "fr-FR-DeniseNeural"),
    ("de", "de-DE-KatjaNeural"),
];

fn lookup(tag: &str) -> Option<&'static str> {
    DEFAULT_VOICES
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(tag))
        .map(|(_, voice)| *voice)
}

/// 查找语言的默认音色
///
/// 先精确匹配（`en-GB`），再退回主语言（`en-AU` → `en`）。
pub fn default_voice_for_language(language: &str) -> Option<&'static str> {
    let tag = language.trim().replace('_', "-");
    if tag.is_empty() {
        return None;
    }

    lookup(&tag).or_else(|| tag.split('-').next().and_then(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(default_voice_for_language("en-GB"), Some("en-GB-SoniaNeural"));
        assert_eq!(default_voice_for_language("zh-TW"), Some("zh-TW-HsiaoChenNeural"));
        assert_eq!(default_voice_for_language("ja"), Some("ja-JP-NanamiNeural"));
    }

    #[test]
    fn test_case_and_separator_insensitive() {
        assert_eq!(default_voice_for_language("en_gb"), Some("en-GB-SoniaNeural"));
        assert_eq!(default_voice_for_language(" FR "), Some("fr-FR-DeniseNeural"));
    }

    #[test]
    fn test_region_falls_back_to_primary_language() {
        assert_eq!(default_voice_for_language("en-AU"), Some("en-US-AriaNeural"));
        assert_eq!(default_voice_for_language("de-AT"), Some("de-DE-KatjaNeural"));
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(default_voice_for_language("xx"), None);
        assert_eq!(default_voice_for_language(""), None);
    }
}
