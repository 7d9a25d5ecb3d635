//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum SyncError {
    // 网络相关错误
    #[error("network request failed: {0}")]
    Network(String),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    // 上游响应格式错误
    #[error("upstream body is not valid JSON: {0}")]
    UpstreamFormat(#[from] SerdeJsonError),
    #[error("unexpected upstream listing shape: {0}")]
    UpstreamShape(String),

    // 规则目录（本地映射表）错误
    #[error("rule catalog error: {0}")]
    Catalog(String),

    // 基础错误
    #[error("io error: {0}")]
    Io(#[from] IoError),
    #[error("invalid url: {0}")]
    Url(#[from] UrlParseError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type SyncResult<T> = Result<T, SyncError>;
