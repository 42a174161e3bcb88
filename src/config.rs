//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 关键词表来源
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordSource {
    Builtin,            // 内置关键词表（编译期固化）
    LocalFile(PathBuf), // 本地JSON关键词表
    Remote(String),     // 远程JSON关键词表（拉取后缓存为MessagePack）
}

/// 评分阈值配置
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOptions {
    // 最短有效文本长度（字符数，去除首尾空白后计算）
    pub min_text_len: usize,
    // 置信度不超过该值时视为未检测到
    pub suppress_threshold: f64,
    // 置信度超过该值时标记为紧急
    pub urgent_threshold: f64,
    // 置信度超过该值时允许远程确认
    pub escalation_threshold: f64,
    // 每多命中一个不同短语的加成
    pub match_bonus: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            min_text_len: 10,
            suppress_threshold: 0.4,
            urgent_threshold: 0.8,
            escalation_threshold: 0.6,
            match_bonus: 0.05,
        }
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 关键词表来源
    pub keyword_source: KeywordSource,
    // 远程关键词表缓存路径
    pub cache_path: PathBuf,
    // 远程关键词表：存在缓存时是否仍然拉取更新
    pub check_update: bool,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 远程分类接口地址（如 https://api.example.com/crisis/detect）
    pub classify_endpoint: Option<String>,
    // 远程分类接口的Bearer令牌
    pub auth_token: Option<String>,
    // 评分阈值
    pub scoring: ScoringOptions,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            keyword_source: KeywordSource::Builtin,
            cache_path: PathBuf::from(".cache/rscrisis/crisis_keywords.mp"),
            check_update: true,
            http_timeout: 10,
            classify_endpoint: None,
            auth_token: None,
            scoring: ScoringOptions::default(),
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn keyword_source(mut self, source: KeywordSource) -> Self {
        self.config.keyword_source = source;
        self
    }

    pub fn cache_path(mut self, path: PathBuf) -> Self {
        self.config.cache_path = path;
        self
    }

    pub fn check_update(mut self, check: bool) -> Self {
        self.config.check_update = check;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn classify_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.classify_endpoint = Some(endpoint.into());
        self
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.config.auth_token = Some(token.into());
        self
    }

    pub fn scoring(mut self, scoring: ScoringOptions) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_thresholds() {
        let scoring = ConfigManager::get_default().scoring;
        assert_eq!(scoring.min_text_len, 10);
        assert_eq!(scoring.suppress_threshold, 0.4);
        assert_eq!(scoring.urgent_threshold, 0.8);
        assert_eq!(scoring.escalation_threshold, 0.6);
        assert_eq!(scoring.match_bonus, 0.05);
    }

    #[test]
    fn test_custom_builder() {
        let config = ConfigManager::custom()
            .keyword_source(KeywordSource::LocalFile(PathBuf::from("kw.json")))
            .classify_endpoint("http://localhost:3000/crisis/detect")
            .http_timeout(3)
            .check_update(false)
            .build();

        assert_eq!(config.keyword_source, KeywordSource::LocalFile(PathBuf::from("kw.json")));
        assert_eq!(config.classify_endpoint.as_deref(), Some("http://localhost:3000/crisis/detect"));
        assert_eq!(config.http_timeout, 3);
        assert!(!config.check_update);
        assert!(config.auth_token.is_none());
    }
}
