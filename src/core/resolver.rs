// ============================================================================
// OpenCode-i18n - 目标路径解析器
// ============================================================================
//
// 文件: src/core/resolver.rs
// 职责: 规则声明路径到上游仓库绝对路径的解析
// 边界:
//   - ✅ packages/opencode 前缀规范化
//   - ✅ 纯字符串/路径运算
//   - ❌ 不应访问文件系统
//   - ❌ 不应包含替换应用逻辑
//
// ============================================================================

use std::path::{Path, PathBuf};

use crate::models::rule::TranslationRuleSet;
use crate::utils::constants::upstream::PACKAGE_PREFIX;

/// 解析规则集的目标文件绝对路径
///
/// 规则作者可以省略 `packages/opencode/` 前缀，按包内相对路径书写；
/// 已带前缀的路径原样拼接。`file` 为空返回 `None`（规则集无目标）。
/// 纯函数，不触碰文件系统。
pub fn resolve(rules: &TranslationRuleSet, source_root: &Path) -> Option<PathBuf> {
    if rules.file.is_empty() {
        return None;
    }

    let declared = Path::new(&rules.file);
    if declared.starts_with(PACKAGE_PREFIX) {
        Some(source_root.join(declared))
    } else {
        Some(source_root.join(PACKAGE_PREFIX).join(declared))
    }
}
