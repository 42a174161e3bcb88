//! 检测模块：危机关键词检测核心逻辑
pub mod scorer;
pub mod detector;
pub mod session;
pub mod monitor;
pub mod global;

// 导出核心接口
pub use self::scorer::ConfidenceScorer;
pub use self::detector::CrisisDetector;
pub use self::session::DetectionSession;
pub use self::monitor::CrisisMonitor;
pub use self::global::{
    detect,
    global_detector,
    init_crisis_detector,
    init_crisis_detector_with_config,
    init_crisis_detector_with_table,
};
