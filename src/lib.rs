//! vtclassify - 影片標題分類引擎與關鍵字建議挖掘器

// 匯出全域錯誤型別
pub use self::error::{VtcError, VtcResult};

// 匯出設定模組
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 匯出規則模組核心介面
pub use self::rule::{
    Badge, CategoryConfig, CategorySettings, EditorData, GameEntry, MainCategory,
    SuggestedKeyword, Video, VideoType,
    EditorDataLoader, EditorCacheManager, ConfigSink, SaveOutcome,
};

// 匯出文字前處理模組核心介面
pub use self::extractor::{TextNormalizer, BracketExtractor, TokenFilter};

// 匯出分類比對模組核心介面
pub use self::classifier::BadgeGenerator;

// 匯出關鍵字挖掘模組核心介面
pub use self::miner::{
    KeywordMiner, MinedKeywords, SuggestedKeywordCard, KeywordConfigMap, KeywordMapping,
    build_suggestion_cards,
};

// 匯出編輯器狀態模組核心介面
pub use self::store::EditorStore;

// 匯出工具模組核心介面
pub use self::utils::LabelConverter;

// 宣告所有子模組
pub mod config;
pub mod error;
pub mod rule;
pub mod extractor;
pub mod classifier;
pub mod miner;
pub mod store;
pub mod utils;
