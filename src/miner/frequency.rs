//! 關鍵字頻率挖掘器
//! 從「僅未分類」影片的標題中，統計括號片語與高頻自由詞，產生候選關鍵字

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::config::GlobalConfig;
use crate::extractor::{BracketExtractor, TextNormalizer, TokenFilter};
use crate::rule::model::{SuggestedKeyword, Video};

/// 挖掘結果：
///  - `bracket_words` 由呼叫端直接套用至雜談分類（免人工審核）
///  - `high_freq_words` 進入建議卡片供使用者逐一審核
#[derive(Debug, Clone, Default)]
pub struct MinedKeywords {
    pub bracket_words: Vec<SuggestedKeyword>,
    pub high_freq_words: Vec<SuggestedKeyword>,
}

/// 關鍵字挖掘器
pub struct KeywordMiner;

impl KeywordMiner {
    /// 對影片清單執行一次挖掘
    ///
    /// 候選影片 = matchedCategories 僅含「未分類」者。
    /// 括號片語以「命中的不重複影片數」計數；凡貢獻過括號片語的影片，
    /// 整部排除於自由詞統計之外，避免同一標題重複計數。
    /// `removed` 為使用者略過的關鍵字，兩個統計階段皆排除。
    pub fn mine(config: &GlobalConfig, videos: &[Video], removed: &[String]) -> MinedKeywords {
        let removed_set: HashSet<String> = removed.iter().map(|k| k.to_lowercase()).collect();

        let candidates: Vec<&Video> =
            videos.iter().filter(|v| v.is_unclassified_only()).collect();

        // 階段一：括號片語
        let mut bracket_hits: HashMap<String, HashSet<&str>> = HashMap::new();
        let mut consumed_by_bracket: HashSet<&str> = HashSet::new();
        for video in &candidates {
            for phrase in BracketExtractor::extract_phrases(&video.title) {
                if removed_set.contains(&phrase) {
                    continue;
                }
                bracket_hits
                    .entry(phrase)
                    .or_default()
                    .insert(video.video_id.as_str());
                consumed_by_bracket.insert(video.video_id.as_str());
            }
        }

        // 階段二：自由詞（先剝除括號跨距再標準化切詞）
        let mut token_hits: HashMap<String, HashSet<&str>> = HashMap::new();
        for video in &candidates {
            if consumed_by_bracket.contains(video.video_id.as_str()) {
                continue;
            }
            let stripped = BracketExtractor::strip_spans(&video.title);
            for token in TextNormalizer::normalize(&stripped).split_whitespace() {
                if !TokenFilter::is_candidate_token(token) {
                    continue;
                }
                if removed_set.contains(token) {
                    continue;
                }
                token_hits
                    .entry(token.to_string())
                    .or_default()
                    .insert(video.video_id.as_str());
            }
        }

        // 彙整排序：影片數由大到小，同數依字典序
        let mut bracket_words: Vec<SuggestedKeyword> = bracket_hits
            .iter()
            .map(|(keyword, ids)| SuggestedKeyword {
                keyword: keyword.clone(),
                count: ids.len(),
            })
            .collect();
        Self::sort_suggestions(&mut bracket_words);

        let mut high_freq_words: Vec<SuggestedKeyword> = token_hits
            .into_iter()
            .filter(|(keyword, ids)| {
                ids.len() >= config.min_keyword_videos && !bracket_hits.contains_key(keyword)
            })
            .map(|(keyword, ids)| SuggestedKeyword {
                keyword,
                count: ids.len(),
            })
            .collect();
        Self::sort_suggestions(&mut high_freq_words);
        high_freq_words.truncate(config.max_suggestions);

        debug!(
            "關鍵字挖掘完成：候選影片 {} 部，括號片語 {} 個，高頻詞 {} 個",
            candidates.len(),
            bracket_words.len(),
            high_freq_words.len()
        );

        MinedKeywords {
            bracket_words,
            high_freq_words,
        }
    }

    // 次數由大到小，同次數依關鍵字字典序
    fn sort_suggestions(suggestions: &mut [SuggestedKeyword]) {
        suggestions.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
    }
}
