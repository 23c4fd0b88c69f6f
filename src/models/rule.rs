// ============================================================================
// OpenCode-i18n - 汉化规则数据模型
// ============================================================================
//
// 文件: src/models/rule.rs
// 职责: 汉化规则文档数据结构定义
// 边界:
//   - ✅ 规则集数据结构定义
//   - ✅ 规则文档序列化/反序列化
//   - ✅ 基础数据访问方法
//   - ❌ 不应包含规则加载逻辑
//   - ❌ 不应包含替换应用逻辑
//   - ❌ 不应包含路径解析逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 汉化规则集，对应一个规则文档
///
/// 文档为 JSON 对象，所有字段可缺省（`{}` 也是合法文档）；未知字段忽略。
/// `file` 为空或 `replacements` 为空的规则集是"惰性"的：应用时跳过，不报错。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRuleSet {
    /// 目标文件的声明相对路径（相对上游仓库，可省略 packages/opencode 前缀）
    #[serde(default)]
    pub file: String,
    /// 分类标签（仅用于统计展示）
    #[serde(default)]
    pub category: String,
    /// 原文 → 译文的字面替换映射，键在文档内唯一，条目间相互独立
    #[serde(default)]
    pub replacements: HashMap<String, String>,
    /// 文档标识（来自加载来源，非文档字段）
    #[serde(skip)]
    pub name: String,
}

/// 单条替换规则
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    /// 原文
    pub from: String,
    /// 译文
    pub to: String,
}

impl TranslationRuleSet {
    /// 规则集是否惰性（无目标文件或无替换条目）
    pub fn is_inert(&self) -> bool {
        self.file.is_empty() || self.replacements.is_empty()
    }

    /// 以列表形式返回全部替换规则（顺序未定义）
    pub fn replacement_list(&self) -> Vec<Replacement> {
        self.replacements
            .iter()
            .map(|(from, to)| Replacement {
                from: from.clone(),
                to: to.clone(),
            })
            .collect()
    }
}
