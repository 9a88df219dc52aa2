//! 標題文字前處理模組：標準化、括號片語擷取、token 過濾

pub mod text_normalizer;
pub mod bracket;
pub mod token_filter;

pub use text_normalizer::TextNormalizer;
pub use bracket::BracketExtractor;
pub use token_filter::{TokenFilter, STOP_WORDS, EN_STOP_WORDS, ZH_STOP_WORDS, SERIAL_PREFIXES};
