//! 分類資料模型定義
//! 僅存放設定與影片資料，無任何業務邏輯，支援序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 影片三大類型（直播檔 / 影片 / Shorts）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Live,
    Videos,
    Shorts,
}

impl VideoType {
    /// 全部影片類型（依編輯器頁籤順序）
    pub const ALL: [VideoType; 3] = [VideoType::Live, VideoType::Videos, VideoType::Shorts];
}

impl Default for VideoType {
    fn default() -> Self {
        VideoType::Videos
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoType::Live => write!(f, "live"),
            VideoType::Videos => write!(f, "videos"),
            VideoType::Shorts => write!(f, "shorts"),
        }
    }
}

/// 主分類名稱（五種固定分類，外加輸出專用的「未分類」佔位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainCategory {
    #[serde(rename = "雜談")]
    Chat,
    #[serde(rename = "節目")]
    Show,
    #[serde(rename = "音樂")]
    Music,
    #[serde(rename = "遊戲")]
    Game,
    #[serde(rename = "其他")]
    Other,
    #[serde(rename = "未分類")]
    Unclassified,
}

impl MainCategory {
    /// 四個純關鍵字主分類（遊戲走 GameEntry，未分類僅用於輸出）
    pub const KEYWORD_CATEGORIES: [MainCategory; 4] = [
        MainCategory::Chat,
        MainCategory::Show,
        MainCategory::Music,
        MainCategory::Other,
    ];

    /// 顯示用中文標籤
    pub fn label(&self) -> &'static str {
        match self {
            MainCategory::Chat => "雜談",
            MainCategory::Show => "節目",
            MainCategory::Music => "音樂",
            MainCategory::Game => "遊戲",
            MainCategory::Other => "其他",
            MainCategory::Unclassified => "未分類",
        }
    }

    /// 是否為純關鍵字主分類
    pub fn is_keyword_category(&self) -> bool {
        matches!(
            self,
            MainCategory::Chat | MainCategory::Show | MainCategory::Music | MainCategory::Other
        )
    }
}

// ======== 為 MainCategory 實作 Display trait（用於 CLI / 日誌輸出） ========
impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 遊戲項目：名稱 + 別名關鍵字清單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    /// 遊戲顯示名稱（清單內唯一，由編輯動作層驗證）
    pub game: String,
    /// 別名關鍵字（不含遊戲名稱本身）
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// 單一影片類型的分類設定：
///  - 雜談 / 節目 / 音樂 / 其他 → 關鍵字陣列
///  - 遊戲 → GameEntry 陣列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySettings {
    #[serde(rename = "雜談", default)]
    pub chat: Vec<String>,
    #[serde(rename = "節目", default)]
    pub show: Vec<String>,
    #[serde(rename = "音樂", default)]
    pub music: Vec<String>,
    #[serde(rename = "其他", default)]
    pub other: Vec<String>,
    #[serde(rename = "遊戲", default)]
    pub games: Vec<GameEntry>,
}

impl CategorySettings {
    /// 取得指定純關鍵字主分類的關鍵字清單（遊戲／未分類回傳 None）
    pub fn keywords_of(&self, main: MainCategory) -> Option<&Vec<String>> {
        match main {
            MainCategory::Chat => Some(&self.chat),
            MainCategory::Show => Some(&self.show),
            MainCategory::Music => Some(&self.music),
            MainCategory::Other => Some(&self.other),
            MainCategory::Game | MainCategory::Unclassified => None,
        }
    }

    /// 可變版本
    pub fn keywords_of_mut(&mut self, main: MainCategory) -> Option<&mut Vec<String>> {
        match main {
            MainCategory::Chat => Some(&mut self.chat),
            MainCategory::Show => Some(&mut self.show),
            MainCategory::Music => Some(&mut self.music),
            MainCategory::Other => Some(&mut self.other),
            MainCategory::Game | MainCategory::Unclassified => None,
        }
    }

    /// 是否完全沒有任何規則
    pub fn is_empty(&self) -> bool {
        self.chat.is_empty()
            && self.show.is_empty()
            && self.music.is_empty()
            && self.other.is_empty()
            && self.games.is_empty()
    }
}

/// 三種影片類型對應各自的 CategorySettings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default)]
    pub live: CategorySettings,
    #[serde(default)]
    pub videos: CategorySettings,
    #[serde(default)]
    pub shorts: CategorySettings,
}

impl CategoryConfig {
    /// 取得指定影片類型的設定
    pub fn settings_of(&self, video_type: VideoType) -> &CategorySettings {
        match video_type {
            VideoType::Live => &self.live,
            VideoType::Videos => &self.videos,
            VideoType::Shorts => &self.shorts,
        }
    }

    /// 可變版本
    pub fn settings_of_mut(&mut self, video_type: VideoType) -> &mut CategorySettings {
        match video_type {
            VideoType::Live => &mut self.live,
            VideoType::Videos => &mut self.videos,
            VideoType::Shorts => &mut self.shorts,
        }
    }
}

/// 單一分類徽章：主分類 + 命中的關鍵字
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub main: MainCategory,
    /// 命中的關鍵字；遊戲類固定為遊戲正式名稱，未分類佔位則為 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// 遊戲類實際命中的別名（tooltip 顯示用，不作為徽章標籤）
    #[serde(rename = "hitKeywords", default, skip_serializing_if = "Vec::is_empty")]
    pub hit_keywords: Vec<String>,
}

impl Badge {
    /// 建立一般關鍵字徽章
    pub fn keyword(main: MainCategory, keyword: String) -> Self {
        Self {
            main,
            keyword: Some(keyword),
            hit_keywords: Vec::new(),
        }
    }

    /// 建立「未分類」佔位徽章
    pub fn unclassified() -> Self {
        Self {
            main: MainCategory::Unclassified,
            keyword: None,
            hit_keywords: Vec::new(),
        }
    }
}

/// 單一影片文件 — 只列分類核心會用到的欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
    #[serde(rename = "publishDate", default)]
    pub publish_date: String,
    /// 影片長度（秒）
    #[serde(default)]
    pub duration: f64,
    #[serde(rename = "type", default)]
    pub video_type: VideoType,
    /// 可能同時包含多個主分類標籤（後端計算結果）
    #[serde(rename = "matchedCategories", default)]
    pub matched_categories: Vec<String>,
    /// 衍生欄位：依目前設定重算的徽章清單，不回存後端
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<Badge>,
}

impl Video {
    /// 是否「僅」被標為未分類（關鍵字挖掘的候選條件）
    pub fn is_unclassified_only(&self) -> bool {
        self.matched_categories.len() == 1
            && self.matched_categories[0] == MainCategory::Unclassified.label()
    }

    /// 是否帶有未分類標籤（建議卡片的命中條件）
    pub fn is_unclassified(&self) -> bool {
        self.matched_categories
            .iter()
            .any(|c| c == MainCategory::Unclassified.label())
    }
}

/// 關鍵字建議單元：關鍵字 + 命中的未分類影片數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedKeyword {
    pub keyword: String,
    pub count: usize,
}

/// 一次編輯工作階段載入的完整資料
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorData {
    #[serde(default)]
    pub config: CategoryConfig,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(rename = "removedSuggestedKeywords", default)]
    pub removed_suggested_keywords: Vec<String>,
}

// 單元測試
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_settings_defaults_missing_keys() {
        // 測試場景：後端回傳缺欄位的設定，應以空陣列補齊
        let json = r#"{"雜談": ["歌回"]}"#;
        let settings: CategorySettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.chat, vec!["歌回".to_string()]);
        assert!(settings.show.is_empty());
        assert!(settings.games.is_empty());
    }

    #[test]
    fn test_category_config_defaults_missing_types() {
        // 測試場景：缺 live/shorts 區塊的設定，應以空設定補齊
        let json = r#"{"videos": {"音樂": ["翻唱"]}}"#;
        let config: CategoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.videos.music, vec!["翻唱".to_string()]);
        assert!(config.live.is_empty());
        assert!(config.shorts.is_empty());
    }

    #[test]
    fn test_main_category_serde_uses_chinese_labels() {
        // 測試場景：主分類序列化為中文標籤
        assert_eq!(serde_json::to_string(&MainCategory::Chat).unwrap(), "\"雜談\"");
        let parsed: MainCategory = serde_json::from_str("\"遊戲\"").unwrap();
        assert_eq!(parsed, MainCategory::Game);
    }

    #[test]
    fn test_video_unclassified_predicates() {
        // 測試場景：僅未分類 vs 同時帶其他分類
        let mut video = Video {
            video_id: "v1".to_string(),
            title: "標題".to_string(),
            publish_date: String::new(),
            duration: 0.0,
            video_type: VideoType::Videos,
            matched_categories: vec!["未分類".to_string()],
            badges: Vec::new(),
        };
        assert!(video.is_unclassified_only());
        assert!(video.is_unclassified());

        video.matched_categories = vec!["雜談".to_string(), "未分類".to_string()];
        assert!(!video.is_unclassified_only());
        assert!(video.is_unclassified());
    }
}
