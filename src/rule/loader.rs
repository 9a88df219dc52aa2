//! 編輯資料載入管理器
//! 負責從本地快取或遠端後端拉取分類設定與影片清單

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::cache::EditorCacheManager;
use super::model::{CategoryConfig, EditorData, Video};
use crate::config::GlobalConfig;
use crate::error::{VtcResult, VtcError};
use crate::utils::LabelConverter;

// 線上影片格式：type 欄位為中文標籤，進核心前轉為內部列舉
#[derive(Debug, Deserialize)]
struct WireVideo {
    #[serde(rename = "videoId")]
    video_id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "publishDate", default)]
    publish_date: String,
    #[serde(default)]
    duration: f64,
    #[serde(rename = "type", default)]
    video_type: String,
    #[serde(rename = "matchedCategories", default)]
    matched_categories: Vec<String>,
}

impl From<WireVideo> for Video {
    fn from(wire: WireVideo) -> Self {
        Video {
            video_id: wire.video_id,
            title: wire.title,
            publish_date: wire.publish_date,
            duration: wire.duration,
            video_type: LabelConverter::type_from_label(&wire.video_type),
            matched_categories: wire.matched_categories,
            badges: Vec::new(),
        }
    }
}

// 遠端編輯資料回應格式
#[derive(Debug, Deserialize)]
struct WireEditorData {
    #[serde(default)]
    config: CategoryConfig,
    #[serde(default)]
    videos: Vec<WireVideo>,
    #[serde(rename = "removedSuggestedKeywords", default)]
    removed_suggested_keywords: Vec<String>,
}

impl From<WireEditorData> for EditorData {
    fn from(wire: WireEditorData) -> Self {
        EditorData {
            config: wire.config,
            videos: wire.videos.into_iter().map(Video::from).collect(),
            removed_suggested_keywords: wire.removed_suggested_keywords,
        }
    }
}

/// 編輯資料載入管理器
pub struct EditorDataLoader;

impl EditorDataLoader {
    /// 載入編輯資料（優先本地快取，快取失效則拉取遠端）
    pub async fn load(config: &GlobalConfig, channel_id: &str) -> VtcResult<EditorData> {
        // 1. 優先載入本地快取
        if let Ok(data) = EditorCacheManager::load_from_cache(config).await {
            debug!("從本地快取載入編輯資料成功");
            return Ok(data);
        }
        warn!("本地快取不存在或損壞，將拉取遠端編輯資料");

        // 2. 拉取遠端編輯資料
        let data = Self::fetch_remote(config, channel_id).await?;

        // 3. 快取到本地（盡力而為，失敗不影響載入）
        if let Err(e) = EditorCacheManager::save_to_cache(config, &data).await {
            warn!("編輯資料快取到本地失敗：{}", e);
        } else {
            debug!("遠端編輯資料已快取到本地");
        }

        Ok(data)
    }

    /// 強制拉取遠端編輯資料（略過快取）
    pub async fn fetch_remote(config: &GlobalConfig, channel_id: &str) -> VtcResult<EditorData> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout))
            .build()?;

        let endpoint = Url::parse(&config.api_base_url)?.join("api/categories/editor-data-v2")?;
        debug!("開始拉取編輯資料，URL：{}，頻道：{}", endpoint, channel_id);

        let response = client
            .get(endpoint)
            .query(&[("channel_id", channel_id)])
            .header("User-Agent", "vtclassify/0.1.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VtcError::ConfigLoadError(format!(
                "編輯資料端點回應狀態碼 {}",
                response.status()
            )));
        }

        let wire: WireEditorData = response.json().await?;
        let data = EditorData::from(wire);
        debug!(
            "遠端編輯資料拉取成功，影片數：{}，略過詞數：{}",
            data.videos.len(),
            data.removed_suggested_keywords.len()
        );
        Ok(data)
    }

    /// 解析影片清單 JSON（離線工具用，輸入為線上格式陣列）
    pub fn parse_videos_json(text: &str) -> VtcResult<Vec<Video>> {
        let wire: Vec<WireVideo> = serde_json::from_str(text)?;
        Ok(wire.into_iter().map(Video::from).collect())
    }

    /// 解析分類設定 JSON（缺漏區塊一律以空設定補齊）
    pub fn parse_config_json(text: &str) -> VtcResult<CategoryConfig> {
        Ok(serde_json::from_str(text)?)
    }
}

// 單元測試
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::VideoType;

    #[test]
    fn test_parse_videos_json_converts_wire_labels() {
        // 測試場景：線上中文類型標籤轉為內部列舉
        let json = r#"[
            {"videoId": "v1", "title": "標題一", "type": "直播檔", "matchedCategories": ["未分類"]},
            {"videoId": "v2", "title": "標題二", "type": "Shorts"}
        ]"#;
        let videos = EditorDataLoader::parse_videos_json(json).unwrap();
        assert_eq!(videos[0].video_type, VideoType::Live);
        assert_eq!(videos[1].video_type, VideoType::Shorts);
        assert!(videos[1].matched_categories.is_empty());
    }

    #[test]
    fn test_parse_config_json_defaults_missing_sections() {
        // 測試場景：缺漏的影片類型與主分類鍵以空陣列補齊
        let config = EditorDataLoader::parse_config_json(r#"{"live": {"雜談": ["閒聊"]}}"#).unwrap();
        assert_eq!(config.live.chat, vec!["閒聊"]);
        assert!(config.videos.is_empty());
        assert!(config.shorts.is_empty());
    }
}
