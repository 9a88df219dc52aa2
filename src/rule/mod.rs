//! 分類規則模組：資料模型、載入、快取與回存

pub mod model;
pub mod loader;
pub mod cache;
pub mod sink;

pub use model::{
    Badge, CategoryConfig, CategorySettings, EditorData, GameEntry, MainCategory,
    SuggestedKeyword, Video, VideoType,
};
pub use loader::EditorDataLoader;
pub use cache::EditorCacheManager;
pub use sink::{ConfigSink, SaveOutcome};
