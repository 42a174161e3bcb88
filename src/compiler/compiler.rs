//! 关键词编译器核心
//! 负责校验关键词表并编译为可执行的匹配器

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Instant;
use regex::Regex;
use tracing::{debug, warn};

use super::pattern::{CompiledKeyword, CompiledKeywordTable, Matcher};
use crate::keyword::{KeywordRule, KeywordTable};
use crate::utils::TextNormalizer;
use crate::error::{RscResult, RscrisisError};

/// 关键词编译器
pub struct KeywordCompiler;

impl KeywordCompiler {
    /// 编译关键词表
    pub fn compile(table: &KeywordTable) -> RscResult<CompiledKeywordTable> {
        let start = Instant::now();

        // 1. 规范化短语并合并冲突项（规范化后相同的短语保留较高权重）
        let mut merged: BTreeMap<String, KeywordRule> = BTreeMap::new();
        for (phrase, rule) in &table.keywords {
            Self::validate_weight(phrase, rule.weight)?;

            let normalized = TextNormalizer::normalize(phrase);
            if normalized.is_empty() {
                return Err(RscrisisError::InvalidKeyword(format!("短语为空：{:?}", phrase)));
            }

            match merged.entry(normalized) {
                Entry::Occupied(mut entry) => {
                    warn!("关键词规范化后重复：{:?}，保留较高权重", phrase);
                    if rule.weight > entry.get().weight {
                        entry.insert(rule.clone());
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(rule.clone());
                }
            }
        }

        // 2. 编译匹配器
        let mut keywords = Vec::with_capacity(merged.len());
        let mut whole_word_count = 0;
        for (phrase, rule) in merged {
            let matcher = if rule.whole_word {
                whole_word_count += 1;
                Matcher::WholeWord(Self::whole_word_regex(&phrase)?)
            } else {
                Matcher::Contains(phrase.clone())
            };

            keywords.push(CompiledKeyword {
                phrase,
                weight: rule.weight,
                category: rule.category,
                matcher,
            });
        }

        debug!(
            "关键词编译完成，总耗时{:?}，关键词{}条（整词匹配{}条）",
            start.elapsed(),
            keywords.len(),
            whole_word_count
        );

        Ok(CompiledKeywordTable { keywords })
    }

    /// 整词匹配正则：首尾为单词字符时用 \b，否则要求紧邻非单词字符或文本边界
    fn whole_word_regex(phrase: &str) -> RscResult<Regex> {
        let is_word_char = |c: char| c.is_alphanumeric() || c == '_';
        let lead = if phrase.starts_with(is_word_char) { r"\b" } else { r"(?:^|\W)" };
        let trail = if phrase.ends_with(is_word_char) { r"\b" } else { r"(?:\W|$)" };
        Ok(Regex::new(&format!("{}{}{}", lead, regex::escape(phrase), trail))?)
    }

    fn validate_weight(phrase: &str, weight: f64) -> RscResult<()> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(RscrisisError::InvalidKeyword(format!(
                "关键词 {:?} 权重 {} 超出 [0,1] 范围",
                phrase, weight
            )));
        }
        Ok(())
    }
}
