//! 危机监控：去重 -> 本地检测 -> 远程确认（可选）-> 通知
use std::sync::Arc;

use super::detector::CrisisDetector;
use super::session::DetectionSession;
use crate::error::RscResult;
use crate::keyword::DetectionResult;
use crate::notifier::{CrisisNotifier, LogNotifier};
use crate::remote::{CrisisClassifier, HttpCrisisClassifier, confirm};

/// 危机监控器（每个调用会话一个实例）
pub struct CrisisMonitor {
    detector: Arc<CrisisDetector>,
    session: DetectionSession,
    classifier: Option<Arc<dyn CrisisClassifier>>,
    notifier: Arc<dyn CrisisNotifier>,
}

impl CrisisMonitor {
    pub fn new(detector: Arc<CrisisDetector>) -> Self {
        Self {
            detector,
            session: DetectionSession::new(),
            classifier: None,
            notifier: Arc::new(LogNotifier),
        }
    }

    /// 按检测器配置创建（配置了远程分类接口时自动启用远程确认）
    pub fn from_config(detector: Arc<CrisisDetector>) -> RscResult<Self> {
        let classifier = HttpCrisisClassifier::from_config(detector.config())?;
        let mut monitor = Self::new(detector);
        if let Some(classifier) = classifier {
            monitor.classifier = Some(Arc::new(classifier));
        }
        Ok(monitor)
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn CrisisClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn CrisisNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn session(&self) -> &DetectionSession {
        &self.session
    }

    /// 检测文本；与上一次相同的文本返回 None 且不重复通知
    pub async fn check(&mut self, text: &str) -> Option<DetectionResult> {
        let local = self.session.observe(&self.detector, text)?;
        if !local.detected {
            return Some(local);
        }

        let result = match &self.classifier {
            Some(classifier) => {
                confirm(classifier.as_ref(), text, local, &self.detector.config().scoring).await
            }
            None => local,
        };

        self.notifier.notify(&result);
        Some(result)
    }
}
