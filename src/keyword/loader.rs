//! 关键词表加载管理器
//! 负责从内置表、本地JSON文件或远程地址加载关键词表

use std::path::Path;
use std::time::Duration;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::builtin::builtin_table;
use super::cache::KeywordCacheManager;
use super::model::KeywordTable;
use crate::config::{GlobalConfig, KeywordSource};
use crate::error::{RscResult, RscrisisError};

/// 关键词表加载管理器
pub struct KeywordLoader;

impl KeywordLoader {
    /// 按配置加载关键词表
    pub async fn load(config: &GlobalConfig) -> RscResult<KeywordTable> {
        match &config.keyword_source {
            KeywordSource::Builtin => {
                debug!("使用内置关键词表");
                Ok(builtin_table())
            }
            KeywordSource::LocalFile(path) => Self::load_local_file(path).await,
            KeywordSource::Remote(url) => Self::load_remote(config, url).await,
        }
    }

    /// 从本地JSON文件加载关键词表
    pub async fn load_local_file(path: &Path) -> RscResult<KeywordTable> {
        let data = tokio::fs::read(path).await.map_err(|e| {
            RscrisisError::KeywordLoadError(format!("读取本地关键词表 {} 失败：{}", path.display(), e))
        })?;
        let table = Self::parse_json(&data)?;
        debug!("从本地文件加载关键词表成功：{}，关键词数：{}", path.display(), table.len());
        Ok(table)
    }

    /// 远程关键词表（优先远程，失败回退缓存）
    async fn load_remote(config: &GlobalConfig, url: &str) -> RscResult<KeywordTable> {
        let cache_path = &config.cache_path;

        // 1. 不检查更新时优先使用本地缓存
        if !config.check_update {
            if let Ok(table) = KeywordCacheManager::load_from_cache(cache_path).await {
                debug!("从本地缓存加载关键词表成功");
                return Ok(table);
            }
            warn!("本地缓存不存在或损坏，将拉取远程关键词表");
        }

        // 2. 拉取远程关键词表
        match Self::fetch_remote(url, config.http_timeout).await {
            Ok(table) => {
                // 3. 缓存到本地
                if let Err(e) = KeywordCacheManager::save_to_cache(cache_path, &table).await {
                    warn!("关键词表缓存到本地失败：{}", e);
                } else {
                    debug!("远程关键词表已缓存到本地");
                }
                Ok(table)
            }
            Err(e) => {
                warn!("拉取远程关键词表失败：{}，尝试使用本地缓存", e);
                KeywordCacheManager::load_from_cache(cache_path).await.map_err(|cache_e| {
                    RscrisisError::KeywordLoadError(format!(
                        "远程拉取失败（{}），本地缓存也不可用（{}）",
                        e, cache_e
                    ))
                })
            }
        }
    }

    /// 强制拉取远程关键词表
    pub async fn fetch_remote(url: &str, http_timeout: u64) -> RscResult<KeywordTable> {
        let url = Url::parse(url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(http_timeout))
            .build()?;

        debug!("开始拉取远程关键词表，URL：{}", url);
        let response = client
            .get(url.clone())
            .header("User-Agent", concat!("rscrisis/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RscrisisError::KeywordLoadError(format!(
                "URL {} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        let table = Self::parse_json(&bytes)?;
        debug!("成功拉取远程关键词表，关键词数：{}", table.len());
        Ok(table)
    }

    /// 解析JSON关键词表
    pub fn parse_json(data: &[u8]) -> RscResult<KeywordTable> {
        let table: KeywordTable = serde_json::from_slice(data)
            .map_err(|e| RscrisisError::KeywordParseError(e.to_string()))?;
        if table.is_empty() {
            return Err(RscrisisError::KeywordParseError("关键词表为空".to_string()));
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::keyword::model::CrisisCategory;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rscrisis_loader_{}_{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_load_builtin() {
        let table = KeywordLoader::load(&ConfigManager::get_default()).await.unwrap();
        assert_eq!(table, builtin_table());
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let path = temp_path("local.json");
        tokio::fs::write(
            &path,
            r#"{ "keywords": { "rock bottom": { "weight": 0.65, "category": "SUICIDE_RISK" } } }"#,
        )
        .await
        .unwrap();

        let config = ConfigManager::custom()
            .keyword_source(KeywordSource::LocalFile(path.clone()))
            .build();
        let table = KeywordLoader::load(&config).await.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.keywords["rock bottom"].category, CrisisCategory::SuicideRisk);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_local_file_is_load_error() {
        let err = KeywordLoader::load_local_file(&temp_path("missing.json")).await.unwrap_err();
        assert!(matches!(err, RscrisisError::KeywordLoadError(_)));
    }

    #[test]
    fn test_parse_json_rejects_empty_and_malformed() {
        assert!(matches!(
            KeywordLoader::parse_json(br#"{ "keywords": {} }"#),
            Err(RscrisisError::KeywordParseError(_))
        ));
        assert!(matches!(
            KeywordLoader::parse_json(b"not json"),
            Err(RscrisisError::KeywordParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_falls_back_to_cache() {
        let cache_path = temp_path("remote_cache").join("keywords.mp");
        let mut cached = KeywordTable::default();
        cached.insert("meltdown", 0.6, CrisisCategory::Meltdown);
        KeywordCacheManager::save_to_cache(&cache_path, &cached).await.unwrap();

        // 不可达地址，拉取失败后回退缓存
        let config = ConfigManager::custom()
            .keyword_source(KeywordSource::Remote("http://127.0.0.1:1/keywords.json".to_string()))
            .cache_path(cache_path.clone())
            .http_timeout(2)
            .build();
        let table = KeywordLoader::load(&config).await.unwrap();
        assert_eq!(table, cached);

        KeywordCacheManager::clear_cache(&cache_path).await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_uses_cache_without_update_check() {
        let cache_path = temp_path("no_update").join("keywords.mp");
        let mut cached = KeywordTable::default();
        cached.insert("seizure", 0.8, CrisisCategory::MedicalEmergency);
        KeywordCacheManager::save_to_cache(&cache_path, &cached).await.unwrap();

        let config = ConfigManager::custom()
            .keyword_source(KeywordSource::Remote("http://127.0.0.1:1/keywords.json".to_string()))
            .cache_path(cache_path.clone())
            .check_update(false)
            .build();
        assert_eq!(KeywordLoader::load(&config).await.unwrap(), cached);

        KeywordCacheManager::clear_cache(&cache_path).await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_without_cache_fails() {
        let config = ConfigManager::custom()
            .keyword_source(KeywordSource::Remote("http://127.0.0.1:1/keywords.json".to_string()))
            .cache_path(temp_path("absent").join("keywords.mp"))
            .http_timeout(2)
            .build();
        let err = KeywordLoader::load(&config).await.unwrap_err();
        assert!(matches!(err, RscrisisError::KeywordLoadError(_)));
    }

    #[tokio::test]
    async fn test_invalid_remote_url() {
        let err = KeywordLoader::fetch_remote("not a url", 1).await.unwrap_err();
        assert!(matches!(err, RscrisisError::UrlError(_)));
    }
}
