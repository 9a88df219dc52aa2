//! 關鍵字挖掘模組：高頻詞統計與建議卡片建構

pub mod frequency;
pub mod card;

pub use frequency::{KeywordMiner, MinedKeywords};
pub use card::{
    build_suggestion_cards, KeywordConfigMap, KeywordMapping, SuggestedKeywordCard,
};
