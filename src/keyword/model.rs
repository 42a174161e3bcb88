//! 关键词与检测结果数据模型定义
//! 仅存储数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// 危机分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrisisCategory {
    SuicideRisk,
    PanicAttack,
    Meltdown,
    FamilyConflict,
    MedicalEmergency,
    Burnout,
    // 远程分类器返回的未知分类统一归入此项
    #[serde(other)]
    Other,
}

impl CrisisCategory {
    /// 分类对应的建议操作
    pub fn suggested_action(&self, urgent: bool) -> &'static str {
        match (self, urgent) {
            (CrisisCategory::MedicalEmergency, true) => "Call emergency services immediately.",
            (_, true) => "Contact a crisis line immediately.",
            (CrisisCategory::SuicideRisk, false) => {
                "Reach out to someone you trust or talk to a crisis counselor."
            }
            (CrisisCategory::PanicAttack, false) => {
                "Try slow breathing or a grounding exercise, and reach out for support if it continues."
            }
            (CrisisCategory::Meltdown, false) => {
                "Move to a quiet, low-stimulation space and take a break."
            }
            (CrisisCategory::FamilyConflict, false) => {
                "Find a safe place and contact a support line if you feel unsafe."
            }
            (CrisisCategory::MedicalEmergency, false) => {
                "Seek medical attention as soon as possible."
            }
            (CrisisCategory::Burnout, false) => {
                "Take a break and consider talking with a counselor."
            }
            (CrisisCategory::Other, false) => "Consider reaching out for support.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CrisisCategory::SuicideRisk => "SUICIDE_RISK",
            CrisisCategory::PanicAttack => "PANIC_ATTACK",
            CrisisCategory::Meltdown => "MELTDOWN",
            CrisisCategory::FamilyConflict => "FAMILY_CONFLICT",
            CrisisCategory::MedicalEmergency => "MEDICAL_EMERGENCY",
            CrisisCategory::Burnout => "BURNOUT",
            CrisisCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for CrisisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单条关键词规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub weight: f64,
    pub category: CrisisCategory,
    // 是否按整词匹配（默认子串包含匹配）
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub whole_word: bool,
}

/// 关键词表（短语 -> 规则），按短语字典序有序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub keywords: BTreeMap<String, KeywordRule>,
}

impl KeywordTable {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// 插入一条子串匹配规则
    pub fn insert(&mut self, phrase: impl Into<String>, weight: f64, category: CrisisCategory) {
        self.keywords.insert(
            phrase.into(),
            KeywordRule {
                weight,
                category,
                whole_word: false,
            },
        );
    }
}

/// 检测结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionSource {
    #[default]
    Local,
    Remote,
}

/// 危机检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CrisisCategory>,
    pub matched_phrases: Vec<String>,
    pub confidence: f64,
    pub suggested_action: String,
    pub show_resources: bool,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub source: DetectionSource,
}

impl DetectionResult {
    /// 未检测到
    pub fn not_detected() -> Self {
        Self {
            detected: false,
            category: None,
            matched_phrases: Vec::new(),
            confidence: 0.0,
            suggested_action: String::new(),
            show_resources: false,
            urgent: false,
            source: DetectionSource::Local,
        }
    }
}

// ======== 为 DetectionResult 实现 Display trait（用于 CLI / 日志输出） ========
impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.category, self.detected) {
            (Some(cat), true) => write!(f, "{} ({:.2})", cat, self.confidence),
            (None, true) => write!(f, "detected ({:.2})", self.confidence),
            _ => write!(f, "not detected"),
        }
    }
}
