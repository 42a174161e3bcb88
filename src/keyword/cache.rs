//! 关键词表缓存管理
//! 仅处理关键词表的本地序列化（MessagePack）和反序列化

use std::path::Path;
use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::debug;

use super::model::KeywordTable;
use crate::error::{RscResult, RscrisisError};

/// 关键词表缓存管理器
pub struct KeywordCacheManager;

impl KeywordCacheManager {
    /// 从本地缓存加载关键词表
    pub async fn load_from_cache(cache_path: &Path) -> RscResult<KeywordTable> {
        let cache_data = tokio::fs::read(cache_path).await?;

        // MessagePack反序列化
        let table: KeywordTable = from_slice(&cache_data)
            .map_err(|e| RscrisisError::MsgPackError(format!("反序列化失败：{}", e)))?;

        debug!("缓存文件反序列化成功，关键词数：{}", table.len());

        Ok(table)
    }

    /// 将关键词表缓存到本地
    pub async fn save_to_cache(cache_path: &Path, table: &KeywordTable) -> RscResult<()> {
        let mut cache_data = Vec::new();

        // 使用命名字段序列化，保证字段增减时缓存仍可读取
        table
            .serialize(&mut Serializer::new(&mut cache_data).with_struct_map())
            .map_err(|e| RscrisisError::MsgPackError(format!("序列化失败：{}", e)))?;

        debug!("关键词表序列化成功，序列化后数据大小：{} 字节", cache_data.len());

        if let Some(parent) = cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地缓存
    pub async fn clear_cache(cache_path: &Path) -> RscResult<()> {
        if tokio::fs::try_exists(cache_path).await? {
            tokio::fs::remove_file(cache_path).await?;
        }
        Ok(())
    }
}
