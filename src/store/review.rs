//! 建議審核動作
//! EditorStore 的建議關鍵字審核面：挖掘重建、同意／撤銷／略過三態轉移

use tracing::debug;

use super::editor::EditorStore;
use crate::config::GlobalConfig;
use crate::error::{VtcError, VtcResult};
use crate::miner::{
    build_suggestion_cards, KeywordConfigMap, KeywordMapping, KeywordMiner, MinedKeywords,
    SuggestedKeywordCard,
};
use crate::rule::model::{MainCategory, SuggestedKeyword, VideoType};

impl EditorStore {
    /// 由現有設定建立「關鍵字 → 主分類／子分類」對應（鍵為小寫）
    pub fn keyword_config_map(&self) -> KeywordConfigMap {
        let mut map = KeywordConfigMap::new();
        for video_type in VideoType::ALL {
            let settings = self.config().settings_of(video_type);
            for main in MainCategory::KEYWORD_CATEGORIES {
                let Some(keywords) = settings.keywords_of(main) else {
                    continue;
                };
                for keyword in keywords {
                    map.entry(keyword.to_lowercase())
                        .or_default()
                        .push(KeywordMapping {
                            main_category: main,
                            subcategory_name: keyword.clone(),
                        });
                }
            }
            for entry in &settings.games {
                map.entry(entry.game.to_lowercase())
                    .or_default()
                    .push(KeywordMapping {
                        main_category: MainCategory::Game,
                        subcategory_name: entry.game.clone(),
                    });
            }
        }
        map
    }

    /// 重新執行一輪挖掘
    pub fn mine_keywords(&self, config: &GlobalConfig) -> MinedKeywords {
        KeywordMiner::mine(config, self.videos(), self.removed_suggested_keywords())
    }

    /// 重新執行挖掘並組裝高頻詞建議卡片
    pub fn rebuild_suggestion_cards(&self, config: &GlobalConfig) -> Vec<SuggestedKeywordCard> {
        let mined = self.mine_keywords(config);
        build_suggestion_cards(
            &mined.high_freq_words,
            self.videos(),
            self.removed_suggested_keywords(),
            &self.keyword_config_map(),
        )
    }

    /// 將括號片語直接套用至雜談分類（免人工審核）
    ///
    /// 已存在於該類型雜談清單中的詞不重複追加，避免每輪挖掘累積。
    pub fn apply_bracket_suggestions(
        &mut self,
        words: &[SuggestedKeyword],
        video_type: VideoType,
    ) -> VtcResult<usize> {
        let mut applied = 0;
        for word in words {
            let exists = self
                .config()
                .settings_of(video_type)
                .chat
                .iter()
                .any(|k| k == &word.keyword);
            if exists {
                continue;
            }
            self.add_keyword_to_config(video_type, MainCategory::Chat, &word.keyword)?;
            applied += 1;
        }
        debug!("括號片語自動套用 {} 個至 {}/雜談", applied, video_type);
        Ok(applied)
    }

    /// 同意建議：pending → agreed
    ///
    /// 寫入設定的是（可能已編輯過的）`subcategory_name`；
    /// 卡片的 `keyword` 仍是計算 `matched_videos` 的過濾鍵。
    /// 未選任何主分類時拒絕；驗證全部通過後才開始寫入。
    pub fn agree_suggestion(
        &mut self,
        card: &mut SuggestedKeywordCard,
        video_type: VideoType,
    ) -> VtcResult<()> {
        if card.main_categories.is_empty() {
            return Err(VtcError::InvalidInput(
                "尚未選擇主分類，無法同意建議".to_string(),
            ));
        }

        // 先驗證，避免寫到一半失敗留下半套設定
        for main in &card.main_categories {
            match main {
                MainCategory::Unclassified => {
                    return Err(VtcError::InvalidCategory(
                        "未分類僅用於輸出，不可作為審核目標".to_string(),
                    ));
                }
                MainCategory::Game => {
                    let duplicated = self
                        .config()
                        .settings_of(video_type)
                        .games
                        .iter()
                        .any(|g| g.game == card.subcategory_name);
                    if duplicated {
                        return Err(VtcError::DuplicateGame(card.subcategory_name.clone()));
                    }
                }
                _ => {}
            }
        }

        for main in card.main_categories.clone() {
            match main {
                MainCategory::Game => {
                    self.add_game_to_config(video_type, &card.subcategory_name, Vec::new())?;
                }
                main => {
                    self.add_keyword_to_config(video_type, main, &card.subcategory_name)?;
                }
            }
        }

        card.agreed = true;
        Ok(())
    }

    /// 撤銷分類：agreed → pending，逐一反轉設定寫入
    pub fn undo_suggestion(
        &mut self,
        card: &mut SuggestedKeywordCard,
        video_type: VideoType,
    ) -> VtcResult<()> {
        for main in card.main_categories.clone() {
            match main {
                MainCategory::Game => {
                    self.remove_game_from_config(video_type, &card.subcategory_name);
                }
                MainCategory::Unclassified => {}
                main => {
                    self.remove_keyword_from_config(video_type, main, &card.subcategory_name)?;
                }
            }
        }
        card.agreed = false;
        Ok(())
    }

    /// 略過建議：pending → skipped；只動略過清單，不碰分類設定
    pub fn skip_suggestion(&mut self, card: &mut SuggestedKeywordCard) {
        self.add_removed_keyword(&card.keyword);
        card.skipped = true;
    }

    /// 取消略過：skipped → pending
    pub fn unskip_suggestion(&mut self, card: &mut SuggestedKeywordCard) {
        self.remove_removed_keyword(&card.keyword);
        card.skipped = false;
    }
}
