//! 影片類型標籤轉換工具
//! 線上資料以中文標籤（直播檔／影片／Shorts）表示影片類型，
//! 進入核心前統一轉換為內部列舉

use tracing::warn;

use crate::rule::model::VideoType;

/// 標籤轉換工具
pub struct LabelConverter;

impl LabelConverter {
    /// 線上標籤 → 內部影片類型
    ///
    /// 同時容忍已是內部值（live/videos/shorts）的輸入；
    /// 無法辨識的標籤回退為 videos 並記錄警告（防禦性預設，不視為錯誤）
    pub fn type_from_label(label: &str) -> VideoType {
        match label {
            "直播檔" | "live" => VideoType::Live,
            "影片" | "videos" => VideoType::Videos,
            "Shorts" | "shorts" => VideoType::Shorts,
            other => {
                warn!("未知的影片類型標籤：{}，回退為 videos", other);
                VideoType::Videos
            }
        }
    }

    /// 內部影片類型 → 顯示用中文標籤
    pub fn label_from_type(video_type: VideoType) -> &'static str {
        match video_type {
            VideoType::Live => "直播檔",
            VideoType::Videos => "影片",
            VideoType::Shorts => "Shorts",
        }
    }
}
