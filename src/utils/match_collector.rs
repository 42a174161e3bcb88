//! 命中结果收集工具
//! 负责累积单次检测中命中的关键词（按短语去重、保留最高权重）

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::keyword::CrisisCategory;

/// 单个命中关键词
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordHit<'a> {
    pub phrase: &'a str,
    pub weight: f64,
    pub category: CrisisCategory,
}

/// 命中结果收集器
#[derive(Debug, Default)]
pub struct MatchCollector<'a> {
    hits: HashMap<&'a str, (f64, CrisisCategory)>,
}

impl<'a> MatchCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次命中（同一短语重复命中时保留较高权重）
    pub fn update(&mut self, phrase: &'a str, weight: f64, category: CrisisCategory) {
        match self.hits.entry(phrase) {
            Entry::Occupied(mut entry) => {
                let (existing_weight, existing_category) = entry.get_mut();
                if weight > *existing_weight {
                    *existing_weight = weight;
                    *existing_category = category;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert((weight, category));
            }
        }
    }

    /// 不同命中短语数
    pub fn distinct_count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// 按权重降序、短语字典序升序排列的命中列表
    /// 首个元素即最高权重命中（同权重时取字典序最小的短语）
    pub fn ranked(&self) -> Vec<KeywordHit<'a>> {
        let mut ranked: Vec<KeywordHit<'a>> = self
            .hits
            .iter()
            .map(|(&phrase, &(weight, category))| KeywordHit {
                phrase,
                weight,
                category,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.phrase.cmp(b.phrase))
        });
        ranked
    }

    /// 最高权重命中
    pub fn top(&self) -> Option<KeywordHit<'a>> {
        self.ranked().into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_phrase_keeps_max_weight() {
        let mut collector = MatchCollector::new();
        collector.update("meltdown", 0.4, CrisisCategory::Meltdown);
        collector.update("meltdown", 0.6, CrisisCategory::Meltdown);
        collector.update("meltdown", 0.5, CrisisCategory::Meltdown);

        assert_eq!(collector.distinct_count(), 1);
        assert_eq!(collector.top().unwrap().weight, 0.6);
    }

    #[test]
    fn test_ranking_weight_desc_then_phrase_asc() {
        let mut collector = MatchCollector::new();
        collector.update("heart racing", 0.5, CrisisCategory::PanicAttack);
        collector.update("overwhelmed", 0.45, CrisisCategory::Burnout);
        collector.update("burned out", 0.5, CrisisCategory::Burnout);

        let phrases: Vec<&str> = collector.ranked().iter().map(|h| h.phrase).collect();
        assert_eq!(phrases, vec!["burned out", "heart racing", "overwhelmed"]);
        // 同权重取字典序最小短语的分类
        assert_eq!(collector.top().unwrap().category, CrisisCategory::Burnout);
    }

    #[test]
    fn test_empty_collector() {
        let collector = MatchCollector::new();
        assert!(collector.is_empty());
        assert!(collector.top().is_none());
    }
}
