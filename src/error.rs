//! 全局错误类型定义
//! 检测路径本身不会返回错误，仅关键词加载/编译/缓存/网络等初始化路径使用

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RscrisisError {
    // 关键词表相关错误
    #[error("关键词表加载失败：{0}")]
    KeywordLoadError(String),
    #[error("关键词表解析失败：{0}")]
    KeywordParseError(String),
    #[error("关键词表缓存失败：{0}")]
    KeywordCacheError(String),
    #[error("无效关键词：{0}")]
    InvalidKeyword(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 检测器相关错误
    #[error("检测器初始化失败：{0}")]
    DetectorInitError(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),
    #[error("远程分类接口异常：{0}")]
    RemoteError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RscResult<T> = Result<T, RscrisisError>;
