//! 远程确认：高置信度本地结果可交由远程分类器复核
//! 远程失败不影响本地结果，本地启发式结果始终作为兜底

use tracing::{debug, warn};

use super::classifier::CrisisClassifier;
use crate::config::ScoringOptions;
use crate::keyword::DetectionResult;

/// 本地结果是否需要远程确认
pub fn should_escalate(local: &DetectionResult, options: &ScoringOptions) -> bool {
    local.detected && local.confidence > options.escalation_threshold
}

/// 远程确认（不重试，失败时返回本地结果）
pub async fn confirm(
    classifier: &dyn CrisisClassifier,
    text: &str,
    local: DetectionResult,
    options: &ScoringOptions,
) -> DetectionResult {
    if !should_escalate(&local, options) {
        return local;
    }

    match classifier.classify(text).await {
        Ok(remote) if remote.detected => {
            debug!("远程分类确认检测结果，采用远程结果");
            remote.into_result(options)
        }
        Ok(_) => {
            debug!("远程分类未检测到，保留本地结果");
            local
        }
        Err(e) => {
            warn!("远程分类失败：{}，保留本地结果", e);
            local
        }
    }
}
