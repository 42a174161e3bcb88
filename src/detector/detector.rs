//! 检测器核心：规范化文本、匹配关键词、输出检测结果
use std::sync::Arc;

use tracing::debug;

use super::scorer::ConfidenceScorer;
use crate::compiler::{CompiledKeywordTable, KeywordCompiler};
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::RscResult;
use crate::keyword::{DetectionResult, KeywordLoader, KeywordTable, builtin_table};
use crate::utils::{MatchCollector, TextNormalizer};

/// 危机关键词检测器
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    compiled_table: Arc<CompiledKeywordTable>,
    config: GlobalConfig,
}

impl CrisisDetector {
    /// 创建检测器（按配置加载关键词表）
    pub async fn new(config: GlobalConfig) -> RscResult<Self> {
        // 1. 加载原始关键词表
        let table = KeywordLoader::load(&config).await?;

        // 2. 编译关键词表
        Self::with_table(table, config)
    }

    /// 使用指定关键词表创建检测器
    pub fn with_table(table: KeywordTable, config: GlobalConfig) -> RscResult<Self> {
        let compiled_table = KeywordCompiler::compile(&table)?;
        Ok(Self {
            compiled_table: Arc::new(compiled_table),
            config,
        })
    }

    /// 使用内置关键词表与默认配置创建检测器
    pub fn builtin() -> RscResult<Self> {
        Self::with_table(builtin_table(), ConfigManager::get_default())
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn keyword_count(&self) -> usize {
        self.compiled_table.len()
    }

    /// 核心检测接口：纯函数，任何输入都不会报错
    pub fn detect(&self, text: &str) -> DetectionResult {
        let scoring = &self.config.scoring;

        // 1. 过短文本直接忽略
        if TextNormalizer::char_len(text) < scoring.min_text_len {
            return DetectionResult::not_detected();
        }

        // 2. 规范化后逐条匹配
        let normalized = TextNormalizer::normalize(text);
        let mut collector = MatchCollector::new();
        for keyword in self.compiled_table.iter() {
            if keyword.matcher.is_match(&normalized) {
                debug!(
                    "关键词匹配成功：短语={}，权重={}，分类={}，规则={}",
                    keyword.phrase,
                    keyword.weight,
                    keyword.category,
                    keyword.matcher.describe()
                );
                collector.update(&keyword.phrase, keyword.weight, keyword.category);
            }
        }

        // 3. 评分与阈值判定
        ConfidenceScorer::evaluate(&collector, scoring)
    }
}
