//! 停用詞與流水號過濾
//! 關鍵字挖掘前的 token 過濾：長度、停用詞、編號／流水號樣式

use std::collections::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// 停用詞清單（英文功能詞）
pub const EN_STOP_WORDS: &[&str] = &[
    "a", "an", "the", // 冠詞
    "and", "or", "but", "if", "because", "as", "while", "than", // 連接詞
    "at", "by", "for", "from", "in", "into", "of", "on", "off", "out", "over", "to", "with",
    "about", "against", "between", "during", "without", "within", "through", "under", "above",
    "below", // 介系詞
    "is", "am", "are", "was", "were", "be", "been", "being", "want", // be 動詞
    "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must", // 助動詞
    "this", "that", "these", "those", // 指示代名詞
    "it", "he", "she", "they", "we", "you", "i", "me", "him", "her", "us", "them", "my",
    "your", "his", "their", "our", // 人稱代名詞
    "so", "such", "not", "no", "nor", "too", "very", "just", "only", "own", "same", // 其他功能詞
    "well", "also", "then", "there", "here", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "ever", "after", "before",
];

/// 停用詞清單（中文與社群常見詞）
pub const ZH_STOP_WORDS: &[&str] = &[
    "更新", "這個",
    "re",
    "台v", "男v", "台灣", "台湾", "台灣vtuber", "台湾vtuber",
    "日v", "馬v", "馬來西亞", "马来西亚", "vtuber", "ai vtuber",
    "新人",
    "初見歡迎", "初見大歓迎", "初見歓迎", "初見",
    "對不起", "天啊", "什麼", "興奮", "遊戲",
    "live", "shorts",
    "high", "game", "games", "gaming", "super", "life", "youtube",
    "city", "wrong", "new", "take", "vs", "v.s", "v.s.",
];

/// 流水號常見前綴詞（中英混用）
pub const SERIAL_PREFIXES: &[&str] = &[
    "no", "ep", "episode", "epsode",
    "no.", "ep.",
    "vol", "vol.",
    "part", "pt",
    "part.", "pt.",
    "ch", "ch.", "chapter", "chapter.",
    "day", "week", "month", "season",
    "章節", "章", "集", "部", "篇", "期", "話", "卷",
];

/// 停用詞集合（英文 + 中文 + 流水號前綴）
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    EN_STOP_WORDS
        .iter()
        .chain(ZH_STOP_WORDS.iter())
        .chain(SERIAL_PREFIXES.iter())
        .copied()
        .collect()
});

// 流水號樣式判斷用的正則
static SERIAL_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d+$",                                                 // 純阿拉伯數字
        r"^[一二三四五六七八九零十百千萬億兆]+$",                  // 純中文數字
        r"(?i)^(i|ii|iii|iv|v|vi|vii|viii|ix|x|xi|xii|xiii|xiv|xv)$", // 羅馬數字
        r"^#?\d{1,4}$",                                           // #12、003
        r"(?i)^s\d+e\d+$",                                        // s01e03
        r"^\d{4}\.\d{1,2}\.\d{1,2}$",                             // 日期格式
        r"^第[一二三四五六七八九十百千萬億零〇两\d]+(年|季|周|週|日|個月)$", // 中文時間格式
        r"^第[一二三四五六七八九十百千萬億零〇两\d]+[章集部篇期話卷]$",   // 第五章、第12集
        r"^[序一二三四五六七八九十百千萬億零〇两\d]+[章集部篇期話卷]$",   // 六部、12篇
        r"^[上下前中後][章集部篇期話卷]$",                         // 上集、後篇、中章
        r"^第?[一二三四五六七八九十百千萬零〇两\d]+[週周]目$",      // 一周目、2週目、第二周目
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

// 前綴 + 1~4 位數字，例如 ep12、vol003
static PREFIX_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z.]+)(\d{1,4})$").unwrap());

// 四種括號配對（流水號可能被完整包覆，例如「【ep12】」）
const BRACKET_PAIRS: [(char, char); 4] = [('(', ')'), ('（', '）'), ('[', ']'), ('【', '】')];

/// Token 過濾工具
pub struct TokenFilter;

impl TokenFilter {
    /// 判斷是否為編號／流水號樣式
    pub fn is_serial_pattern(word: &str) -> bool {
        let normalized = word.to_lowercase();

        // 1. 直接命中樣式或前綴規則
        if Self::matches_serial(&normalized) {
            return true;
        }

        // 2. 括號完整包覆的模式
        if let Some(inner) = Self::strip_wrapping_brackets(&normalized) {
            if Self::matches_serial(inner) {
                return true;
            }
        }

        false
    }

    /// 判斷 token 是否可作為挖掘候選：長度 ≥ 2、非停用詞、非流水號
    pub fn is_candidate_token(word: &str) -> bool {
        if word.chars().count() < 2 {
            return false;
        }
        if STOP_WORDS.contains(word.to_lowercase().as_str()) {
            return false;
        }
        !Self::is_serial_pattern(word)
    }

    // 樣式正則 + 前綴數字規則
    fn matches_serial(word: &str) -> bool {
        if SERIAL_REGEXES.iter().any(|regex| regex.is_match(word)) {
            return true;
        }
        if let Some(caps) = PREFIX_NUMBER.captures(word) {
            if let Some(prefix) = caps.get(1) {
                return SERIAL_PREFIXES.contains(&prefix.as_str());
            }
        }
        false
    }

    // 若整個 token 被一組配對括號包覆，回傳括號內文字
    fn strip_wrapping_brackets(word: &str) -> Option<&str> {
        let mut chars = word.chars();
        let first = chars.next()?;
        let last = chars.next_back()?;
        if !BRACKET_PAIRS
            .iter()
            .any(|&(open, close)| first == open && last == close)
        {
            return None;
        }
        let inner = &word[first.len_utf8()..word.len() - last.len_utf8()];
        if inner.is_empty() { None } else { Some(inner) }
    }
}
