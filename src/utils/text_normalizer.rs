//! 文本规范化工具
//! 关键词编译与文本检测共用同一套规范化规则，保证两侧可比

use once_cell::sync::Lazy;
use regex::Regex;

/// 文本规范化工具
pub struct TextNormalizer;

impl TextNormalizer {
    /// 规范化：小写 + 排版撇号统一为 ' + 连续空白折叠为单个空格 + 去除首尾空白
    pub fn normalize(text: &str) -> String {
        static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

        let lowered = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
        WHITESPACE_REGEX.replace_all(lowered.trim(), " ").into_owned()
    }

    /// 去除首尾空白后的字符数
    pub fn char_len(text: &str) -> usize {
        text.trim().chars().count()
    }
}
