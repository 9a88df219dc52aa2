//! 分類設定回存
//! 將完整分類設定與略過詞清單回傳後端，由後端重算全頻道分類

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::model::CategoryConfig;
use crate::config::GlobalConfig;
use crate::error::{VtcResult, VtcError};

// 回存請求格式
#[derive(Debug, Serialize)]
struct SavePayload<'a> {
    channel_id: &'a str,
    settings: &'a CategoryConfig,
    skipped: &'a [String],
}

// 回存回應格式
#[derive(Debug, Deserialize)]
struct SaveResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    // 後端以 -1 表示「已受理、非同步套用」
    #[serde(default)]
    updated_count: i64,
}

/// 回存結果
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// 分類結果有變動的影片數
    pub updated_count: i64,
    /// 後端附帶訊息
    pub message: Option<String>,
}

/// 分類設定回存器
pub struct ConfigSink;

impl ConfigSink {
    /// 儲存並套用分類設定
    ///
    /// 一次性請求：不重試、不退避（已知缺口，由呼叫端自行決定通知方式）。
    pub async fn save_and_apply(
        config: &GlobalConfig,
        channel_id: &str,
        settings: &CategoryConfig,
        skipped: &[String],
    ) -> VtcResult<SaveOutcome> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout))
            .build()?;

        let endpoint = Url::parse(&config.api_base_url)?.join("api/categories/save-and-apply")?;
        debug!("開始回存分類設定，URL：{}，頻道：{}", endpoint, channel_id);

        let payload = SavePayload {
            channel_id,
            settings,
            skipped,
        };

        let response = client
            .post(endpoint)
            .header("User-Agent", "vtclassify/0.1.0")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body: SaveResponse = response.json().await.map_err(|e| {
            VtcError::ConfigSaveError(format!("回應解析失敗（狀態碼 {}）：{}", status, e))
        })?;

        if !status.is_success() || !body.success {
            let reason = body
                .error
                .or(body.message)
                .unwrap_or_else(|| format!("狀態碼 {}", status));
            return Err(VtcError::ConfigSaveError(reason));
        }

        debug!("分類設定回存成功，套用 {} 筆", body.updated_count);
        Ok(SaveOutcome {
            updated_count: body.updated_count,
            message: body.message,
        })
    }
}
