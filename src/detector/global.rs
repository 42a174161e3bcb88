//! 全局检测器单例管理
//! 未显式初始化时，`detect` 回退到懒加载的内置关键词表检测器
use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, info, warn};

use super::detector::CrisisDetector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{RscResult, RscrisisError};
use crate::keyword::{DetectionResult, KeywordTable};

/// 全局检测器实例
static GLOBAL_DETECTOR: OnceCell<CrisisDetector> = OnceCell::new();

/// 内置关键词表检测器（兜底）
static BUILTIN_DETECTOR: Lazy<Option<CrisisDetector>> = Lazy::new(|| {
    CrisisDetector::builtin()
        .map_err(|e| warn!("内置关键词表编译失败：{}", e))
        .ok()
});

/// 初始化全局检测器（默认配置）
pub async fn init_crisis_detector() -> RscResult<()> {
    init_crisis_detector_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局检测器（已初始化时直接返回）
pub async fn init_crisis_detector_with_config(config: GlobalConfig) -> RscResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        debug!("全局检测器已初始化，跳过");
        return Ok(());
    }

    let detector = CrisisDetector::new(config).await?;
    set_global(detector)
}

/// 手动注入关键词表初始化全局检测器
pub fn init_crisis_detector_with_table(table: KeywordTable, config: GlobalConfig) -> RscResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        debug!("全局检测器已初始化，跳过");
        return Ok(());
    }

    let detector = CrisisDetector::with_table(table, config)?;
    set_global(detector)
}

fn set_global(detector: CrisisDetector) -> RscResult<()> {
    let keyword_count = detector.keyword_count();
    GLOBAL_DETECTOR.set(detector).map_err(|_| {
        RscrisisError::DetectorInitError("全局检测器已被其他线程初始化".to_string())
    })?;
    info!("全局检测器初始化完成，关键词数：{}", keyword_count);
    Ok(())
}

/// 获取全局检测器（未初始化时为 None）
pub fn global_detector() -> Option<&'static CrisisDetector> {
    GLOBAL_DETECTOR.get()
}

/// 检测文本：优先使用全局检测器，否则使用内置关键词表
pub fn detect(text: &str) -> DetectionResult {
    global_detector()
        .or(BUILTIN_DETECTOR.as_ref())
        .map(|detector| detector.detect(text))
        .unwrap_or_else(DetectionResult::not_detected)
}
