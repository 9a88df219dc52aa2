//! 括號片語擷取工具
//! 從標題的四種括號樣式中擷取片語，作為自動建議關鍵字的來源

use once_cell::sync::Lazy;
use regex::Regex;

use super::text_normalizer::TextNormalizer;

// 四種括號樣式的非貪婪跨距
static BRACKET_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\[\(【（](.*?)[\]\)】）]").unwrap());
// 僅一個中文字
static SINGLE_HAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Han}$").unwrap());

/// 括號片語擷取工具
pub struct BracketExtractor;

impl BracketExtractor {
    /// 擷取括號中的片語
    ///
    /// 排除僅包住一個中文字的情況（例如「(新)」這類雜訊），
    /// 其餘片語經標準化後回傳；本函式不去重，由呼叫端彙整計數。
    pub fn extract_phrases(title: &str) -> Vec<String> {
        BRACKET_SPAN
            .captures_iter(title)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .filter(|content| !SINGLE_HAN.is_match(content.trim()))
            .map(|content| TextNormalizer::normalize(content).trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect()
    }

    /// 將標題中的括號跨距（含括號本身）替換為空白
    ///
    /// 自由 token 統計前先行剝除，避免與括號片語重複計數。
    pub fn strip_spans(title: &str) -> String {
        BRACKET_SPAN.replace_all(title, " ").to_string()
    }
}

// 單元測試
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phrases_keeps_multi_char_and_drops_single_han() {
        // 測試場景：多字片語保留、單一中文字排除
        let phrases = BracketExtractor::extract_phrases("【雜談】聊聊(生活)(新)");
        assert!(phrases.contains(&"雜談".to_string()));
        assert!(phrases.contains(&"生活".to_string()));
        assert!(!phrases.iter().any(|p| p == "新"));
    }

    #[test]
    fn test_extract_phrases_normalizes_content() {
        // 測試場景：片語經標準化（小寫、邊界補空白）
        let phrases = BracketExtractor::extract_phrases("[Minecraft建築] 直播");
        assert_eq!(phrases, vec!["minecraft 建築".to_string()]);
    }

    #[test]
    fn test_extract_phrases_handles_fullwidth_brackets() {
        // 測試場景：全形括號與混搭括號樣式
        let phrases = BracketExtractor::extract_phrases("（歌回）【APEX】");
        assert_eq!(phrases, vec!["歌回".to_string(), "apex".to_string()]);
    }

    #[test]
    fn test_extract_phrases_empty_when_no_brackets() {
        // 測試場景：無括號標題回傳空清單
        assert!(BracketExtractor::extract_phrases("純聊天直播").is_empty());
    }

    #[test]
    fn test_strip_spans_removes_bracketed_content() {
        // 測試場景：剝除括號跨距後自由 token 不含括號內文字
        let stripped = BracketExtractor::strip_spans("【歌回】唱歌 雜談");
        assert!(!stripped.contains("歌回"));
        assert!(stripped.contains("唱歌"));
    }
}
