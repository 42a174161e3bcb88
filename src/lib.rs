//! rscrisis - 文本危机风险关键词评分库

// 导出全局错误类型
pub use self::error::{RscrisisError, RscResult};

// 导出配置模块
pub use self::config::{
    GlobalConfig, ConfigManager, CustomConfigBuilder, KeywordSource, ScoringOptions
};

// 导出关键词模块核心接口
pub use self::keyword::{
    CrisisCategory, KeywordRule, KeywordTable, DetectionResult, DetectionSource,
    KeywordLoader, KeywordCacheManager, BUILTIN_KEYWORDS, builtin_table
};

// 导出编译模块核心接口
pub use self::compiler::{CompiledKeyword, CompiledKeywordTable, KeywordCompiler, Matcher};

// 导出工具模块核心接口
pub use self::utils::{TextNormalizer, MatchCollector, KeywordHit};

// 导出检测模块核心接口
pub use self::detector::{
    CrisisDetector,
    CrisisMonitor,
    DetectionSession,
    ConfidenceScorer,
    detect,
    global_detector,
    init_crisis_detector,
    init_crisis_detector_with_config,
    init_crisis_detector_with_table,
};

// 导出远程确认与通知接口
pub use self::remote::{CrisisClassifier, HttpCrisisClassifier, RemoteDetection};
pub use self::notifier::{CrisisNotifier, LogNotifier, ChannelNotifier};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod keyword;
pub mod utils;
pub mod compiler;
pub mod detector;
pub mod remote;
pub mod notifier;
