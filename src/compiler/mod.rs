//! 编译模块：将关键词表编译为可执行的匹配器
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledKeyword, CompiledKeywordTable, Matcher};
pub use self::compiler::KeywordCompiler;
