//! 检测会话：记录上一次检测的文本，跳过完全相同的重复输入

use super::detector::CrisisDetector;
use crate::keyword::DetectionResult;

/// 检测会话（由单个调用方独占，无需加锁）
#[derive(Debug, Default, Clone)]
pub struct DetectionSession {
    last_text: Option<String>,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 检测文本；与上一次文本（忽略大小写与首尾空白）相同时返回 None
    pub fn observe(&mut self, detector: &CrisisDetector, text: &str) -> Option<DetectionResult> {
        let key = text.trim().to_lowercase();
        if self.last_text.as_deref() == Some(key.as_str()) {
            return None;
        }
        self.last_text = Some(key);
        Some(detector.detect(text))
    }

    /// 上一次检测的文本（小写、去除首尾空白）
    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn reset(&mut self) {
        self.last_text = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_is_skipped() {
        let detector = CrisisDetector::builtin().unwrap();
        let mut session = DetectionSession::new();

        let first = session.observe(&detector, "I am having a panic attack");
        assert!(first.unwrap().detected);
        // 大小写不同视为同一文本
        assert!(session.observe(&detector, "I AM HAVING A PANIC ATTACK").is_none());
        assert_eq!(session.last_text(), Some("i am having a panic attack"));
    }

    #[test]
    fn test_different_text_reevaluates() {
        let detector = CrisisDetector::builtin().unwrap();
        let mut session = DetectionSession::new();

        assert!(session.observe(&detector, "I am having a panic attack").is_some());
        assert!(session.observe(&detector, "Everything is fine now, thanks").is_some());
        // 与再上一次相同的文本也会重新检测
        assert!(session.observe(&detector, "I am having a panic attack").is_some());
    }

    #[test]
    fn test_whitespace_or_apostrophe_variants_reevaluate() {
        let detector = CrisisDetector::builtin().unwrap();
        let mut session = DetectionSession::new();

        assert!(session.observe(&detector, "I am having a panic attack").is_some());
        assert!(session.observe(&detector, "I am having a panic  attack").is_some());
        assert!(session.observe(&detector, "  i am having a PANIC  attack ").is_none());

        assert!(session.observe(&detector, "I can't breathe right now").is_some());
        assert!(session.observe(&detector, "I can\u{2019}t breathe right now").is_some());
    }

    #[test]
    fn test_reset_clears_last_text() {
        let detector = CrisisDetector::builtin().unwrap();
        let mut session = DetectionSession::new();

        assert!(session.observe(&detector, "I feel suicidal today").is_some());
        session.reset();
        assert!(session.last_text().is_none());
        assert!(session.observe(&detector, "I feel suicidal today").is_some());
    }
}
