//! 置信度评分与阈值判定

use crate::config::ScoringOptions;
use crate::keyword::{DetectionResult, DetectionSource};
use crate::utils::MatchCollector;

const SCORE_PRECISION: f64 = 1e9;

/// 置信度评分器
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// 置信度 = min(1, 最高权重 + (不同命中数 - 1) × 加成)，结果限制在 [0,1]
    /// 结果保留9位小数，消除浮点累加误差（阈值比较依赖精确值）
    pub fn score(max_weight: f64, distinct_matches: usize, match_bonus: f64) -> f64 {
        if distinct_matches == 0 {
            return 0.0;
        }
        let extra = (distinct_matches - 1) as f64 * match_bonus;
        let rounded = ((max_weight + extra) * SCORE_PRECISION).round() / SCORE_PRECISION;
        rounded.clamp(0.0, 1.0)
    }

    /// 根据命中结果生成检测结果（含阈值抑制与紧急标记）
    pub fn evaluate(collector: &MatchCollector<'_>, options: &ScoringOptions) -> DetectionResult {
        let ranked = collector.ranked();
        let Some(top) = ranked.first() else {
            return DetectionResult::not_detected();
        };

        let confidence = Self::score(top.weight, ranked.len(), options.match_bonus);
        if confidence <= options.suppress_threshold {
            return DetectionResult::not_detected();
        }

        let urgent = confidence > options.urgent_threshold;
        DetectionResult {
            detected: true,
            category: Some(top.category),
            matched_phrases: ranked.iter().map(|hit| hit.phrase.to_string()).collect(),
            confidence,
            suggested_action: top.category.suggested_action(urgent).to_string(),
            show_resources: true,
            urgent,
            source: DetectionSource::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::CrisisCategory;

    #[test]
    fn test_score_formula() {
        assert_eq!(ConfidenceScorer::score(0.0, 0, 0.05), 0.0);
        assert_eq!(ConfidenceScorer::score(1.0, 1, 0.05), 1.0);
        assert!((ConfidenceScorer::score(0.5, 2, 0.05) - 0.55).abs() < 1e-9);
        // 上限截断
        assert_eq!(ConfidenceScorer::score(0.95, 5, 0.05), 1.0);
    }

    #[test]
    fn test_score_monotonic() {
        let mut previous = 0.0;
        for n in 1..30 {
            let score = ConfidenceScorer::score(0.3, n, 0.05);
            assert!(score >= previous);
            assert!((0.0..=1.0).contains(&score));
            previous = score;
        }

        let mut previous = 0.0;
        for step in 0..=20 {
            let weight = step as f64 / 20.0;
            let score = ConfidenceScorer::score(weight, 3, 0.05);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_score_has_no_float_drift() {
        // 以下组合直接浮点累加均会偏离 0.6
        assert_eq!(ConfidenceScorer::score(0.55, 2, 0.05), 0.6);
        assert_eq!(ConfidenceScorer::score(0.45, 4, 0.05), 0.6);
        assert_eq!(ConfidenceScorer::score(0.3, 7, 0.05), 0.6);
        assert_eq!(ConfidenceScorer::score(0.2, 9, 0.05), 0.6);
        assert_eq!(ConfidenceScorer::score(0.0, 13, 0.05), 0.6);
        assert_eq!(ConfidenceScorer::score(0.3, 3, 0.05), 0.4);
    }

    /// 构造同权重的多个不同命中
    fn collector_with(phrases: &[&'static str], weight: f64) -> MatchCollector<'static> {
        let mut collector = MatchCollector::new();
        for &phrase in phrases {
            collector.update(phrase, weight, CrisisCategory::Burnout);
        }
        collector
    }

    #[test]
    fn test_suppress_at_threshold() {
        let options = ScoringOptions::default();

        // 单条权重恰为 0.4
        let collector = collector_with(&["stressed out"], 0.4);
        assert_eq!(ConfidenceScorer::evaluate(&collector, &options), DetectionResult::not_detected());

        // 0.3 + 2 × 0.05 = 0.4
        let collector = collector_with(&["a", "b", "c"], 0.3);
        assert_eq!(ConfidenceScorer::evaluate(&collector, &options), DetectionResult::not_detected());

        // 0.25 + 3 × 0.05 = 0.4
        let collector = collector_with(&["a", "b", "c", "d"], 0.25);
        assert!(!ConfidenceScorer::evaluate(&collector, &options).detected);

        // 0.25 + 4 × 0.05 = 0.45
        let collector = collector_with(&["a", "b", "c", "d", "e"], 0.25);
        let result = ConfidenceScorer::evaluate(&collector, &options);
        assert!(result.detected);
        assert_eq!(result.confidence, 0.45);
        assert!(result.show_resources);
    }

    #[test]
    fn test_show_resources_and_urgent_bands() {
        let options = ScoringOptions::default();

        let mut collector = MatchCollector::new();
        collector.update("overwhelmed", 0.45, CrisisCategory::Burnout);
        let result = ConfidenceScorer::evaluate(&collector, &options);
        assert!(result.detected);
        assert!(result.show_resources);
        assert!(!result.urgent);

        // 0.8 不超过紧急阈值
        let mut collector = MatchCollector::new();
        collector.update("panic attack", 0.8, CrisisCategory::PanicAttack);
        let result = ConfidenceScorer::evaluate(&collector, &options);
        assert!(result.show_resources);
        assert!(!result.urgent);

        let mut collector = MatchCollector::new();
        collector.update("overdose", 0.95, CrisisCategory::MedicalEmergency);
        let result = ConfidenceScorer::evaluate(&collector, &options);
        assert!(result.show_resources);
        assert!(result.urgent);
        assert_eq!(result.suggested_action, "Call emergency services immediately.");
    }
}
