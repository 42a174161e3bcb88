//! 工具模块：文本规范化与命中结果收集
pub mod text_normalizer;
pub mod match_collector;

pub use self::text_normalizer::TextNormalizer;
pub use self::match_collector::{KeywordHit, MatchCollector};
