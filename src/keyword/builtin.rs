//! 内置危机关键词表（编译期固化，进程内不可变）

use super::model::{CrisisCategory, KeywordTable};
use CrisisCategory::*;

/// 内置关键词：(短语, 权重, 分类)
/// 短语统一小写；权重不超过0.4的短语单独命中时会被抑制
pub const BUILTIN_KEYWORDS: &[(&str, f64, CrisisCategory)] = &[
    // 自杀风险
    ("suicidal", 1.0, SuicideRisk),
    ("kill myself", 1.0, SuicideRisk),
    ("end my life", 1.0, SuicideRisk),
    ("want to die", 0.95, SuicideRisk),
    ("better off dead", 0.9, SuicideRisk),
    ("no reason to live", 0.9, SuicideRisk),
    ("self harm", 0.85, SuicideRisk),
    ("hurt myself", 0.85, SuicideRisk),
    ("can't go on", 0.7, SuicideRisk),
    ("hopeless", 0.45, SuicideRisk),
    // 惊恐发作
    ("panic attack", 0.8, PanicAttack),
    ("can't breathe", 0.75, PanicAttack),
    ("hyperventilating", 0.7, PanicAttack),
    ("heart racing", 0.5, PanicAttack),
    ("losing control", 0.5, PanicAttack),
    // 崩溃
    ("meltdown", 0.6, Meltdown),
    ("sensory overload", 0.6, Meltdown),
    ("can't stop crying", 0.55, Meltdown),
    ("falling apart", 0.45, Meltdown),
    // 家庭冲突
    ("domestic violence", 0.85, FamilyConflict),
    ("afraid to go home", 0.75, FamilyConflict),
    ("abusive", 0.7, FamilyConflict),
    ("kicked me out", 0.6, FamilyConflict),
    ("family fight", 0.45, FamilyConflict),
    // 医疗紧急
    ("overdose", 0.95, MedicalEmergency),
    ("unconscious", 0.85, MedicalEmergency),
    ("bleeding heavily", 0.85, MedicalEmergency),
    ("seizure", 0.8, MedicalEmergency),
    ("chest pain", 0.8, MedicalEmergency),
    // 职业倦怠
    ("can't cope", 0.55, Burnout),
    ("burnout", 0.5, Burnout),
    ("burned out", 0.5, Burnout),
    ("overwhelmed", 0.45, Burnout),
    ("can't sleep", 0.35, Burnout),
    ("stressed out", 0.3, Burnout),
];

/// 构建内置关键词表
pub fn builtin_table() -> KeywordTable {
    let mut table = KeywordTable::default();
    for (phrase, weight, category) in BUILTIN_KEYWORDS {
        table.insert(*phrase, *weight, *category);
    }
    table
}
