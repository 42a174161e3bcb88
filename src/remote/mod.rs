//! 远程模块：远程分类接口与高置信度结果的远程确认
pub mod classifier;
pub mod escalation;

pub use self::classifier::{CrisisClassifier, HttpCrisisClassifier, RemoteDetection};
pub use self::escalation::{confirm, should_escalate};
