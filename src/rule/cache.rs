//! 編輯資料快取管理
//! 僅處理編輯資料的本地序列化（MessagePack）和反序列化

use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::debug;

use super::model::EditorData;
use crate::error::{VtcResult, VtcError};
use crate::config::GlobalConfig;

/// 編輯資料快取管理器
pub struct EditorCacheManager;

impl EditorCacheManager {
    /// 從本地快取載入編輯資料
    pub async fn load_from_cache(config: &GlobalConfig) -> VtcResult<EditorData> {
        let cache_path = &config.cache_path;
        let cache_data = tokio::fs::read(cache_path).await?;

        // MessagePack反序列化
        let data: EditorData = from_slice(&cache_data)
            .map_err(|e| VtcError::MsgPackError(format!("反序列化失敗：{}", e)))?;

        debug!(
            "快取檔反序列化成功，影片數：{}，略過詞數：{}",
            data.videos.len(),
            data.removed_suggested_keywords.len()
        );

        Ok(data)
    }

    /// 將編輯資料快取到本地
    pub async fn save_to_cache(config: &GlobalConfig, data: &EditorData) -> VtcResult<()> {
        let cache_path = &config.cache_path;
        let mut cache_data = Vec::new();

        // MessagePack序列化
        data.serialize(&mut Serializer::new(&mut cache_data))
            .map_err(|e| VtcError::MsgPackError(format!("序列化失敗：{}", e)))?;

        debug!("編輯資料序列化成功，序列化後資料大小：{} 位元組", cache_data.len());

        // 寫入檔案
        tokio::fs::write(cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地快取
    pub async fn clear_cache(config: &GlobalConfig) -> VtcResult<()> {
        let cache_path = &config.cache_path;
        if cache_path.exists() {
            tokio::fs::remove_file(cache_path).await?;
        }
        Ok(())
    }
}
