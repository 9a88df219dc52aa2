//! 全域設定管理，集中存放所有可調整項

use std::path::PathBuf;

/// 全域設定
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 後端 API 基底 URL
    pub api_base_url: String,
    // 編輯資料快取路徑
    pub cache_path: PathBuf,
    // 超時設定（單位：秒）
    pub http_timeout: u64,
    // 高頻詞門檻：至少命中幾部「未分類」影片才列入建議
    pub min_keyword_videos: usize,
    // 高頻詞建議數量上限
    pub max_suggestions: usize,
    // 是否啟用詳細日誌
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/".to_string(),
            cache_path: PathBuf::from("editor_data_cache.mp"),
            http_timeout: 30,
            min_keyword_videos: 2,
            max_suggestions: 50,
            verbose: false,
        }
    }
}

/// 設定管理器（單例）
pub struct ConfigManager;

impl ConfigManager {
    /// 取得預設設定
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自訂設定
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 設定建構器（便於自訂設定）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn api_base_url(mut self, url: String) -> Self {
        self.config.api_base_url = url;
        self
    }

    pub fn cache_path(mut self, path: PathBuf) -> Self {
        self.config.cache_path = path;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn min_keyword_videos(mut self, min: usize) -> Self {
        self.config.min_keyword_videos = min;
        self
    }

    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.config.max_suggestions = max;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
