//! 標題文字標準化工具
//! 用於影片標題、關鍵字分析與比對前的統一前處理

use once_cell::sync::Lazy;
use regex::Regex;

// 中文+英文 → 中 英
static HAN_THEN_LATIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\p{Han})([A-Za-z])").unwrap());
// 英文+中文 → 英 中
static LATIN_THEN_HAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z])(\p{Han})").unwrap());
// 四種括號字元
static BRACKET_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[\]【】()（）]").unwrap());
// 非文字字元（保留中英文字母、數字、底線）
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+").unwrap());
// 非文字字元（另外保留點號）
static NON_WORD_KEEP_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_.]+").unwrap());

/// 文字標準化工具
pub struct TextNormalizer;

impl TextNormalizer {
    /// 標準化文字（不保留點號）
    pub fn normalize(text: &str) -> String {
        Self::normalize_with_options(text, false)
    }

    /// 標準化文字
    ///
    /// 步驟：
    /// 1. 在中英文邊界補空白（雙向），避免「鼠繪Live」黏成一個詞
    /// 2. 將括號字元替換為空白
    /// 3. 連續的非文字字元收斂為單一空白（`preserve_dot` 為 true 時保留 `.`）
    /// 4. 轉為小寫
    pub fn normalize_with_options(text: &str, preserve_dot: bool) -> String {
        let separated = HAN_THEN_LATIN.replace_all(text, "$1 $2");
        let separated = LATIN_THEN_HAN.replace_all(&separated, "$1 $2");

        let replaced = BRACKET_CHARS.replace_all(&separated, " ");

        let pattern = if preserve_dot { &*NON_WORD_KEEP_DOT } else { &*NON_WORD };
        pattern.replace_all(&replaced, " ").to_lowercase()
    }

    /// 標準化後依空白切出 token 清單
    pub fn tokenize(text: &str) -> Vec<String> {
        Self::normalize(text)
            .split_whitespace()
            .map(|t| t.to_string())
            .collect()
    }
}

// 單元測試
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_inserts_han_latin_boundary() {
        // 測試場景：中英文交界處應補空白
        assert_eq!(TextNormalizer::normalize("鼠繪Live"), "鼠繪 live");
        assert_eq!(TextNormalizer::normalize("Live鼠繪"), "live 鼠繪");
        assert_eq!(TextNormalizer::normalize("a中b"), "a 中 b");
    }

    #[test]
    fn test_normalize_is_fixed_point_on_own_output() {
        // 測試場景：對已標準化字串重複套用應為不動點
        let inputs = ["鼠繪Live", "【雜談】聊聊(生活)", "EP.12 - 咒術迷！回戰", "A B　C"];
        for input in inputs {
            let once = TextNormalizer::normalize(input);
            let twice = TextNormalizer::normalize(&once);
            assert_eq!(once, twice, "非不動點：{}", input);
        }
    }

    #[test]
    fn test_normalize_strips_brackets_and_symbols() {
        // 測試場景：括號與符號收斂為單一空白並轉小寫
        assert_eq!(TextNormalizer::normalize("【雜談】聊聊!!（生活）"), " 雜談 聊聊 生活 ");
        assert_eq!(TextNormalizer::normalize("Minecraft★建築"), "minecraft 建築");
    }

    #[test]
    fn test_normalize_preserve_dot() {
        // 測試場景：preserve_dot 保留點號，預設不保留
        assert_eq!(
            TextNormalizer::normalize_with_options("v.s. 2023.05.01", true),
            "v.s. 2023.05.01"
        );
        assert_eq!(TextNormalizer::normalize("ep.12"), "ep 12");
    }

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        // 測試場景：token 切分不含空字串
        let tokens = TextNormalizer::tokenize("【歌回】唱歌Live!!");
        assert_eq!(tokens, vec!["歌回", "唱歌", "live"]);
    }
}
