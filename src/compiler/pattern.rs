//! 编译后关键词模型

use regex::Regex;

use crate::keyword::CrisisCategory;

#[derive(Debug, Clone)]
pub enum Matcher {
    Contains(String), // 子串包含匹配（输入已规范化）
    WholeWord(Regex), // 整词匹配
}

impl Matcher {
    /// 简单匹配判断（输入需已规范化）
    pub fn is_match(&self, normalized: &str) -> bool {
        match self {
            Matcher::Contains(s) => normalized.contains(s.as_str()),
            Matcher::WholeWord(regex) => regex.is_match(normalized),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Matcher::Contains(_) => "contains",
            Matcher::WholeWord(r) => r.as_str(),
        }
    }
}

/// 编译后的关键词
#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    pub phrase: String,
    pub weight: f64,
    pub category: CrisisCategory,
    pub matcher: Matcher,
}

/// 编译后的关键词表（按短语字典序排列）
#[derive(Debug, Clone, Default)]
pub struct CompiledKeywordTable {
    pub keywords: Vec<CompiledKeyword>,
}

impl CompiledKeywordTable {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledKeyword> {
        self.keywords.iter()
    }
}
