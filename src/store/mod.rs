//! 編輯器狀態模組：設定／影片存放區與建議審核動作

pub mod editor;
pub mod review;

pub use editor::EditorStore;
