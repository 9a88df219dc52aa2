//! 編輯器狀態存放區
//! 單一編輯工作階段的設定／影片狀態，所有變更皆透過具名動作方法，
//! 讀取一律走存取器；每次設定變更後同步重算該影片類型的徽章

use tracing::debug;

use crate::classifier::BadgeGenerator;
use crate::error::{VtcError, VtcResult};
use crate::rule::model::{
    CategoryConfig, CategorySettings, EditorData, GameEntry, MainCategory, Video, VideoType,
};

/// 編輯器存放區
///
/// 單一寫入者、同步完成：每個動作方法在回傳前即完成徽章重算，
/// 呼叫端不會觀察到設定與徽章不一致的中間狀態。
#[derive(Debug, Clone, Default)]
pub struct EditorStore {
    channel_id: String,
    config: CategoryConfig,
    videos: Vec<Video>,
    unsaved: bool,
    removed_suggested_keywords: Vec<String>,
}

impl EditorStore {
    /// 建立空的存放區
    pub fn new(channel_id: &str) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            ..Default::default()
        }
    }

    /// 從載入的編輯資料建立存放區，並對全部影片補上初始徽章
    pub fn from_editor_data(channel_id: &str, data: EditorData) -> Self {
        let mut store = Self {
            channel_id: channel_id.to_string(),
            config: data.config,
            videos: data.videos,
            unsaved: false,
            removed_suggested_keywords: data.removed_suggested_keywords,
        };
        for video_type in VideoType::ALL {
            store.regenerate_badges_for_type(video_type);
        }
        store
    }

    /* ---------- 存取器 ---------- */

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn config(&self) -> &CategoryConfig {
        &self.config
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// 指定類型的影片
    pub fn videos_of_type(&self, video_type: VideoType) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.video_type == video_type)
            .collect()
    }

    pub fn unsaved(&self) -> bool {
        self.unsaved
    }

    pub fn removed_suggested_keywords(&self) -> &[String] {
        &self.removed_suggested_keywords
    }

    /* ---------- 載入期 setter ---------- */

    /// 全量替換設定並重算全部徽章（載入／重新整理用，不視為編輯）
    pub fn set_config(&mut self, config: CategoryConfig) {
        self.config = config;
        for video_type in VideoType::ALL {
            self.regenerate_badges_for_type(video_type);
        }
    }

    /// 全量替換影片清單並依現有設定補上徽章
    pub fn set_videos(&mut self, videos: Vec<Video>) {
        self.videos = videos;
        for video_type in VideoType::ALL {
            self.regenerate_badges_for_type(video_type);
        }
    }

    /* ---------- 設定變更動作 ---------- */

    /// 全量替換單一影片類型的設定
    pub fn update_config_of_type(&mut self, video_type: VideoType, settings: CategorySettings) {
        *self.config.settings_of_mut(video_type) = settings;
        self.regenerate_badges_for_type(video_type);
        self.unsaved = true;
    }

    /// 在純關鍵字主分類追加關鍵字
    ///
    /// 本層不做重複檢查：重複關鍵字是允許的，下游比對自行容忍。
    pub fn add_keyword_to_config(
        &mut self,
        video_type: VideoType,
        main: MainCategory,
        keyword: &str,
    ) -> VtcResult<()> {
        let Some(keywords) = self.config.settings_of_mut(video_type).keywords_of_mut(main) else {
            return Err(VtcError::InvalidCategory(format!(
                "{} 不是純關鍵字主分類",
                main
            )));
        };
        keywords.push(keyword.to_string());
        debug!("新增關鍵字 [{}] 至 {}/{}", keyword, video_type, main);
        self.regenerate_badges_for_type(video_type);
        self.unsaved = true;
        Ok(())
    }

    /// 自純關鍵字主分類移除關鍵字（移除所有完全相同的出現）
    pub fn remove_keyword_from_config(
        &mut self,
        video_type: VideoType,
        main: MainCategory,
        keyword: &str,
    ) -> VtcResult<()> {
        let Some(keywords) = self.config.settings_of_mut(video_type).keywords_of_mut(main) else {
            return Err(VtcError::InvalidCategory(format!(
                "{} 不是純關鍵字主分類",
                main
            )));
        };
        keywords.retain(|k| k != keyword);
        self.regenerate_badges_for_type(video_type);
        self.unsaved = true;
        Ok(())
    }

    /// 新增遊戲項目；名稱重複時拒絕並保持狀態不變
    pub fn add_game_to_config(
        &mut self,
        video_type: VideoType,
        game: &str,
        keywords: Vec<String>,
    ) -> VtcResult<()> {
        let games = &mut self.config.settings_of_mut(video_type).games;
        if games.iter().any(|g| g.game == game) {
            return Err(VtcError::DuplicateGame(game.to_string()));
        }
        games.push(GameEntry {
            game: game.to_string(),
            keywords,
        });
        debug!("新增遊戲 [{}] 至 {}", game, video_type);
        self.regenerate_badges_for_type(video_type);
        self.unsaved = true;
        Ok(())
    }

    /// 依名稱移除遊戲項目
    pub fn remove_game_from_config(&mut self, video_type: VideoType, game: &str) {
        self.config
            .settings_of_mut(video_type)
            .games
            .retain(|g| g.game != game);
        self.regenerate_badges_for_type(video_type);
        self.unsaved = true;
    }

    /* ---------- 略過建議詞 ---------- */

    /// 將關鍵字加入略過清單（不碰分類設定）
    pub fn add_removed_keyword(&mut self, keyword: &str) {
        let exists = self
            .removed_suggested_keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(keyword) || k == keyword);
        if !exists {
            self.removed_suggested_keywords.push(keyword.to_string());
            self.unsaved = true;
        }
    }

    /// 自略過清單移除關鍵字
    pub fn remove_removed_keyword(&mut self, keyword: &str) {
        let before = self.removed_suggested_keywords.len();
        self.removed_suggested_keywords.retain(|k| k != keyword);
        if self.removed_suggested_keywords.len() != before {
            self.unsaved = true;
        }
    }

    /// 清空略過清單
    pub fn reset_removed_keywords(&mut self) {
        self.removed_suggested_keywords.clear();
    }

    /* ---------- 匯出投影 ---------- */

    /// 三種影片類型設定串接成單一設定（防禦性複製，與內部狀態無共享）
    pub fn merged_settings(&self) -> CategorySettings {
        let mut merged = CategorySettings::default();
        for video_type in VideoType::ALL {
            let settings = self.config.settings_of(video_type);
            merged.chat.extend(settings.chat.iter().cloned());
            merged.show.extend(settings.show.iter().cloned());
            merged.music.extend(settings.music.iter().cloned());
            merged.other.extend(settings.other.iter().cloned());
            merged.games.extend(settings.games.iter().cloned());
        }
        merged
    }

    /// 完整三類型設定的深複製（匯出／存檔用）
    pub fn full_merged_config(&self) -> CategoryConfig {
        self.config.clone()
    }

    /* ---------- 存檔與重置 ---------- */

    /// 存檔成功後呼叫：清除未儲存旗標與略過清單
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
        self.reset_removed_keywords();
    }

    /// 重置整個存放區
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /* ---------- 內部 ---------- */

    // 對指定類型的全部影片重算徽章
    fn regenerate_badges_for_type(&mut self, video_type: VideoType) {
        let settings = self.config.settings_of(video_type).clone();
        for video in self.videos.iter_mut().filter(|v| v.video_type == video_type) {
            video.badges = BadgeGenerator::generate(video, Some(&settings));
        }
    }
}

// 單元測試
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::Badge;

    fn video(id: &str, title: &str, video_type: VideoType) -> Video {
        Video {
            video_id: id.to_string(),
            title: title.to_string(),
            publish_date: String::new(),
            duration: 0.0,
            video_type,
            matched_categories: vec!["未分類".to_string()],
            badges: Vec::new(),
        }
    }

    fn store_with_videos() -> EditorStore {
        let mut store = EditorStore::new("UC_test");
        store.set_videos(vec![
            video("v1", "【雜談】今天聊聊", VideoType::Videos),
            video("v2", "唱歌回 精選", VideoType::Videos),
            video("v3", "【雜談】直播檔", VideoType::Live),
        ]);
        store
    }

    #[test]
    fn test_videos_get_placeholder_badges_without_config() {
        // 測試場景：空設定下全部影片帶未分類佔位徽章
        let store = store_with_videos();
        for v in store.videos() {
            assert_eq!(v.badges, vec![Badge::unclassified()]);
        }
        assert!(!store.unsaved());
    }

    #[test]
    fn test_add_keyword_regenerates_badges_for_type_only() {
        // 測試場景：新增關鍵字後僅該類型影片重算徽章
        let mut store = store_with_videos();
        store
            .add_keyword_to_config(VideoType::Videos, MainCategory::Chat, "雜談")
            .unwrap();

        let v1 = &store.videos()[0];
        assert_eq!(v1.badges[0].main, MainCategory::Chat);
        // live 影片標題也含「雜談」，但設定只動了 videos，不受影響
        let v3 = &store.videos()[2];
        assert_eq!(v3.badges, vec![Badge::unclassified()]);
        assert!(store.unsaved());
    }

    #[test]
    fn test_add_keyword_tolerates_duplicates() {
        // 測試場景：重複關鍵字不去重，徽章隨之重複且下游容忍
        let mut store = store_with_videos();
        store
            .add_keyword_to_config(VideoType::Videos, MainCategory::Chat, "雜談")
            .unwrap();
        store
            .add_keyword_to_config(VideoType::Videos, MainCategory::Chat, "雜談")
            .unwrap();
        assert_eq!(store.config().videos.chat, vec!["雜談", "雜談"]);
        assert_eq!(store.videos()[0].badges.len(), 2);
    }

    #[test]
    fn test_add_keyword_rejects_game_category() {
        // 測試場景：遊戲主分類不可走關鍵字動作
        let mut store = store_with_videos();
        let result =
            store.add_keyword_to_config(VideoType::Videos, MainCategory::Game, "Minecraft");
        assert!(matches!(result, Err(VtcError::InvalidCategory(_))));
        assert!(!store.unsaved());
    }

    #[test]
    fn test_remove_keyword_removes_all_occurrences() {
        // 測試場景：移除動作清掉所有完全相同的出現
        let mut store = store_with_videos();
        for _ in 0..2 {
            store
                .add_keyword_to_config(VideoType::Videos, MainCategory::Chat, "雜談")
                .unwrap();
        }
        store
            .remove_keyword_from_config(VideoType::Videos, MainCategory::Chat, "雜談")
            .unwrap();
        assert!(store.config().videos.chat.is_empty());
        assert_eq!(store.videos()[0].badges, vec![Badge::unclassified()]);
    }

    #[test]
    fn test_add_game_rejects_duplicate_name_and_keeps_state() {
        // 測試場景：遊戲名稱重複被拒絕，設定與旗標不變
        let mut store = store_with_videos();
        store
            .add_game_to_config(VideoType::Videos, "Minecraft", vec!["麥塊".to_string()])
            .unwrap();
        let config_before = store.config().clone();

        let result = store.add_game_to_config(VideoType::Videos, "Minecraft", Vec::new());
        assert!(matches!(result, Err(VtcError::DuplicateGame(_))));
        assert_eq!(store.config(), &config_before);
    }

    #[test]
    fn test_remove_game_by_name() {
        // 測試場景：依名稱移除遊戲項目
        let mut store = store_with_videos();
        store
            .add_game_to_config(VideoType::Videos, "Minecraft", Vec::new())
            .unwrap();
        store.remove_game_from_config(VideoType::Videos, "Minecraft");
        assert!(store.config().videos.games.is_empty());
    }

    #[test]
    fn test_update_config_of_type_is_idempotent_for_badges() {
        // 測試場景：同樣設定套用兩次，徽章輸出完全相同（不累積重複）
        let mut store = store_with_videos();
        let settings = CategorySettings {
            chat: vec!["雜談".to_string()],
            ..Default::default()
        };
        store.update_config_of_type(VideoType::Videos, settings.clone());
        let first: Vec<Vec<Badge>> = store.videos().iter().map(|v| v.badges.clone()).collect();
        store.update_config_of_type(VideoType::Videos, settings);
        let second: Vec<Vec<Badge>> = store.videos().iter().map(|v| v.badges.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_merged_projections_are_defensive_copies() {
        // 測試場景：改動匯出投影不影響存放區後續徽章輸出
        let mut store = store_with_videos();
        store
            .add_keyword_to_config(VideoType::Videos, MainCategory::Chat, "雜談")
            .unwrap();

        let mut merged = store.merged_settings();
        merged.chat.clear();
        let mut full = store.full_merged_config();
        full.videos.chat.clear();

        assert_eq!(store.config().videos.chat, vec!["雜談"]);
        assert_eq!(store.videos()[0].badges[0].main, MainCategory::Chat);
    }

    #[test]
    fn test_merged_settings_concatenates_all_types() {
        // 測試場景：合併投影串接三種類型的規則
        let mut store = store_with_videos();
        store
            .add_keyword_to_config(VideoType::Live, MainCategory::Chat, "閒聊")
            .unwrap();
        store
            .add_keyword_to_config(VideoType::Videos, MainCategory::Chat, "雜談")
            .unwrap();
        store
            .add_game_to_config(VideoType::Shorts, "APEX", Vec::new())
            .unwrap();

        let merged = store.merged_settings();
        assert_eq!(merged.chat, vec!["閒聊", "雜談"]);
        assert_eq!(merged.games.len(), 1);
    }

    #[test]
    fn test_removed_keyword_list_roundtrip() {
        // 測試場景：略過清單新增／去重／移除／清空
        let mut store = store_with_videos();
        store.add_removed_keyword("歌回");
        store.add_removed_keyword("歌回");
        assert_eq!(store.removed_suggested_keywords(), ["歌回"]);
        assert!(store.unsaved());

        store.remove_removed_keyword("歌回");
        assert!(store.removed_suggested_keywords().is_empty());

        store.add_removed_keyword("開箱");
        store.mark_saved();
        assert!(!store.unsaved());
        assert!(store.removed_suggested_keywords().is_empty());
    }
}
