//! 关键词模块：负责关键词表的数据模型、内置表、加载与缓存
pub mod model;
pub mod builtin;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{
    CrisisCategory, KeywordRule, KeywordTable, DetectionResult, DetectionSource
};
pub use self::builtin::{BUILTIN_KEYWORDS, builtin_table};
pub use self::loader::KeywordLoader;
pub use self::cache::KeywordCacheManager;
