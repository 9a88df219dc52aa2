//! 建議卡片建構器
//! 將高頻詞挖掘結果組裝成可審核的建議卡片初始狀態

use std::collections::HashMap;
use tracing::debug;

use crate::extractor::TextNormalizer;
use crate::rule::model::{MainCategory, SuggestedKeyword, Video};

/// 使用者既有設定中的單筆關鍵字對應：主分類 + 儲存的子分類名稱
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMapping {
    pub main_category: MainCategory,
    pub subcategory_name: String,
}

/// 關鍵字 → 既有設定對應（鍵一律為小寫）
pub type KeywordConfigMap = HashMap<String, Vec<KeywordMapping>>;

/// 單張建議卡片的審核狀態
///
/// 三態：pending（初始）/ agreed / skipped，所有轉移在存檔前皆可逆。
/// `keyword` 是比對用的過濾鍵，永不隨編輯改變；`subcategory_name`
/// 才是「同意」時寫入設定的標籤，預設等於 `keyword`。
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedKeywordCard {
    pub keyword: String,
    pub count: usize,
    pub agreed: bool,
    pub skipped: bool,
    pub subcategory_name: String,
    pub main_categories: Vec<MainCategory>,
    pub matched_videos: Vec<Video>,
}

impl SuggestedKeywordCard {
    /// 編輯子分類名稱：僅改寫入設定的標籤，不動比對鍵
    pub fn set_subcategory_name(&mut self, name: &str) {
        self.subcategory_name = name.to_string();
    }

    /// 切換主分類選取狀態
    pub fn toggle_main_category(&mut self, main: MainCategory) {
        if let Some(pos) = self.main_categories.iter().position(|m| *m == main) {
            self.main_categories.remove(pos);
        } else {
            self.main_categories.push(main);
        }
    }
}

/// 根據高頻詞與影片清單，建立建議卡片的初始狀態陣列
///
/// 卡片的 `matched_videos` 採「標準化 token 完全相等」比對（非子字串，
/// 與徽章產生器的子字串比對刻意不同），且僅計入未分類影片或
/// 已存在於使用者設定對應中的關鍵字。
pub fn build_suggestion_cards(
    keywords: &[SuggestedKeyword],
    videos: &[Video],
    skip_keywords: &[String],
    config_map: &KeywordConfigMap,
) -> Vec<SuggestedKeywordCard> {
    debug!(
        "建立建議卡片：候選詞 {} 個，影片 {} 部，略過詞 {} 個，既有對應 {} 筆",
        keywords.len(),
        videos.len(),
        skip_keywords.len(),
        config_map.len()
    );

    let mut cards: Vec<SuggestedKeywordCard> = keywords
        .iter()
        .map(|suggested| {
            let lower_keyword = suggested.keyword.to_lowercase();

            // 找出所有以完整 token 命中該關鍵字的影片
            let matched: Vec<Video> = videos
                .iter()
                .filter(|v| {
                    let tokens = TextNormalizer::tokenize(&v.title);
                    if !tokens.iter().any(|t| *t == lower_keyword) {
                        return false;
                    }
                    v.is_unclassified() || config_map.contains_key(&lower_keyword)
                })
                .cloned()
                .collect();

            // 既有設定對應 → 還原 agreed 狀態
            let mut agreed = false;
            let mut main_categories: Vec<MainCategory> = Vec::new();
            let mut subcategory_name = suggested.keyword.clone();
            if let Some(mappings) = config_map.get(&lower_keyword) {
                agreed = true;
                for mapping in mappings {
                    if !main_categories.contains(&mapping.main_category) {
                        main_categories.push(mapping.main_category);
                    }
                }
                if let Some(first) = mappings.first() {
                    subcategory_name = first.subcategory_name.clone();
                }
            }

            SuggestedKeywordCard {
                keyword: suggested.keyword.clone(),
                count: suggested.count,
                agreed,
                skipped: skip_keywords.contains(&suggested.keyword),
                subcategory_name,
                main_categories,
                matched_videos: matched,
            }
        })
        .collect();

    // 命中影片數由大到小，其次挖掘次數，再依字典序
    cards.sort_by(|a, b| {
        b.matched_videos
            .len()
            .cmp(&a.matched_videos.len())
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.keyword.cmp(&b.keyword))
    });

    cards
}
