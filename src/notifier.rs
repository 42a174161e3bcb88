//! 检测结果通知：日志输出或转发到通道供上层界面消费

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{info, warn};

use crate::keyword::DetectionResult;

/// 检测结果通知器
pub trait CrisisNotifier: Send + Sync {
    fn notify(&self, result: &DetectionResult);
}

/// 日志通知器（默认）
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl CrisisNotifier for LogNotifier {
    fn notify(&self, result: &DetectionResult) {
        if result.urgent {
            warn!(
                "检测到紧急危机信号：分类={:?}，置信度={:.2}，建议={}",
                result.category, result.confidence, result.suggested_action
            );
        } else {
            info!(
                "检测到危机信号：分类={:?}，置信度={:.2}，命中={:?}",
                result.category, result.confidence, result.matched_phrases
            );
        }
    }
}

/// 通道通知器：接收端关闭后静默丢弃
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: UnboundedSender<DetectionResult>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<DetectionResult>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl CrisisNotifier for ChannelNotifier {
    fn notify(&self, result: &DetectionResult) {
        if self.sender.send(result.clone()).is_err() {
            warn!("通知通道已关闭，丢弃检测结果");
        }
    }
}
