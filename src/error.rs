//! 全域錯誤型別定義

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum VtcError {
    // 設定資料相關錯誤
    #[error("分類設定載入失敗：{0}")]
    ConfigLoadError(String),
    #[error("分類設定儲存失敗：{0}")]
    ConfigSaveError(String),

    // 編輯器操作相關錯誤
    #[error("無效的主分類操作：{0}")]
    InvalidCategory(String),
    #[error("遊戲名稱重複：{0}")]
    DuplicateGame(String),

    // 網路相關錯誤
    #[error("網路請求失敗：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化錯誤
    #[error("JSON解析失敗：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失敗：{0}")]
    MsgPackError(String),

    // 基礎錯誤
    #[error("IO操作失敗：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失敗：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("無效輸入：{0}")]
    InvalidInput(String),
}

// 全域Result型別
pub type VtcResult<T> = Result<T, VtcError>;
