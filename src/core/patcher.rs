// ============================================================================
// OpenCode-i18n - 替换引擎
// ============================================================================
//
// 文件: src/core/patcher.rs
// 职责: 单个规则集对单个目标文件的字面替换应用
// 边界:
//   - ✅ 换行规范化和字面匹配替换
//   - ✅ 逐条成功/失败计数
//   - ✅ 跳过语义和 dry-run 模式
//   - ❌ 不应包含规则加载逻辑
//   - ❌ 不应包含变量安全检查
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::resolver;
use crate::models::rule::TranslationRuleSet;

/// 单个规则集内的逐条替换计数
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplacementCounts {
    /// 原文在目标内容中出现并被替换的条数
    pub success: usize,
    /// 原文未在目标内容中出现的条数
    pub failed: usize,
}

/// 单次规则集应用的结果
///
/// `success` 仅表示读取（及非 dry-run 下的写入）未发生 I/O 错误，
/// 与逐条匹配数量无关；"是否真的改动了文件"要看 `counts`。
#[derive(Debug, Clone, Serialize)]
pub struct ApplyOutcome {
    /// 文档标识（用于展示）
    pub name: String,
    /// 分类标签
    pub category: String,
    /// 读写路径是否无 I/O 错误地完成
    pub success: bool,
    /// 是否被跳过（目标缺失 / 路径为空 / 规则为空）
    pub skipped: bool,
    /// 跳过原因（仅 skipped 时有意义）
    pub skip_reason: String,
    /// 写入失败等 I/O 错误信息
    pub error: Option<String>,
    /// 逐条替换计数
    pub counts: ReplacementCounts,
}

impl ApplyOutcome {
    fn skipped(rules: &TranslationRuleSet, reason: String) -> Self {
        Self {
            name: rules.name.clone(),
            category: rules.category.clone(),
            success: false,
            skipped: true,
            skip_reason: reason,
            error: None,
            counts: ReplacementCounts::default(),
        }
    }
}

/// 替换引擎，持有上游仓库根目录
pub struct PatchEngine {
    source_root: PathBuf,
}

impl PatchEngine {
    pub fn new<P: AsRef<Path>>(source_root: P) -> Self {
        Self {
            source_root: source_root.as_ref().to_path_buf(),
        }
    }

    /// 解析规则集的目标文件绝对路径
    pub fn resolve(&self, rules: &TranslationRuleSet) -> Option<PathBuf> {
        resolver::resolve(rules, &self.source_root)
    }

    /// 应用一个规则集的全部替换到其目标文件
    ///
    /// 各条规则相互独立：逐条在"本次应用中已替换过的内容"上做字面
    /// 包含判断，条目顺序未定义（规则包按约定不应出现 from/to 重叠）。
    /// dry-run 模式照常计数但绝不写入；非 dry-run 仅在至少一条命中时
    /// 整文件写回（沿用原文件权限）。
    pub fn apply(&self, rules: &TranslationRuleSet, dry_run: bool) -> ApplyOutcome {
        // 1. 解析目标路径，惰性规则集直接跳过，不做任何 I/O
        let target = match self.resolve(rules) {
            Some(path) => path,
            None => return ApplyOutcome::skipped(rules, "规则集未声明目标文件".to_string()),
        };

        if rules.replacements.is_empty() {
            return ApplyOutcome::skipped(rules, "替换规则为空".to_string());
        }

        // 2. 目标缺失或不可读都是跳过，不是错误
        if !target.exists() {
            return ApplyOutcome::skipped(rules, "目标文件不存在".to_string());
        }

        let raw = match fs::read_to_string(&target) {
            Ok(content) => content,
            Err(e) => {
                return ApplyOutcome::skipped(rules, format!("目标文件读取失败: {}", e));
            }
        };

        // 3. 统一把 CRLF 规范化为 LF，内容和规则两侧同时做，
        //    使匹配不受目标文件与规则作者换行约定差异的影响
        let mut content = normalize_newlines(&raw);
        let mut counts = ReplacementCounts::default();

        for (from, to) in &rules.replacements {
            let from = normalize_newlines(from);
            let to = normalize_newlines(to);

            if content.contains(&from) {
                content = content.replace(&from, &to);
                counts.success += 1;
            } else {
                counts.failed += 1;
            }
        }

        // 4. dry-run 绝不写入；非 dry-run 在无命中时也不写入
        let mut error = None;
        if !dry_run && counts.success > 0 {
            // 整文件覆盖写，沿用既有文件权限；失败不 panic，按结果上报
            if let Err(e) = fs::write(&target, &content) {
                error = Some(format!("目标文件写入失败: {}", e));
            }
        }

        ApplyOutcome {
            name: rules.name.clone(),
            category: rules.category.clone(),
            success: error.is_none(),
            skipped: false,
            skip_reason: String::new(),
            error,
            counts,
        }
    }
}

/// CRLF → LF 规范化
fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn rule_set(file: &str, pairs: &[(&str, &str)]) -> TranslationRuleSet {
        let mut replacements = HashMap::new();
        for (from, to) in pairs {
            replacements.insert(from.to_string(), to.to_string());
        }
        TranslationRuleSet {
            file: file.to_string(),
            category: "test".to_string(),
            replacements,
            name: "test.json".to_string(),
        }
    }

    fn write_target(root: &TempDir, content: &str) -> PathBuf {
        let target = root
            .path()
            .join("packages")
            .join("opencode")
            .join("src")
            .join("app.tsx");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, content).unwrap();
        target
    }

    #[test]
    fn test_apply_dry_run_does_not_mutate() {
        let root = TempDir::new().unwrap();
        let target = write_target(&root, "Hello World");

        let engine = PatchEngine::new(root.path());
        let rules = rule_set("packages/opencode/src/app.tsx", &[("Hello", "你好")]);

        let outcome = engine.apply(&rules, true);

        assert!(!outcome.skipped, "不应该跳过: {}", outcome.skip_reason);
        assert!(outcome.success);
        assert_eq!(outcome.counts.success, 1);

        // 验证文件内容未改变（dry run）
        assert_eq!(fs::read_to_string(&target).unwrap(), "Hello World");
    }

    #[test]
    fn test_apply_actual_replace() {
        let root = TempDir::new().unwrap();
        let target = write_target(&root, "Hello World");

        let engine = PatchEngine::new(root.path());
        let rules = rule_set(
            "packages/opencode/src/app.tsx",
            &[("Hello", "你好"), ("World", "世界")],
        );

        let outcome = engine.apply(&rules, false);

        assert!(outcome.success);
        assert_eq!(outcome.counts.success, 2);
        assert_eq!(outcome.counts.failed, 0);
        assert_eq!(fs::read_to_string(&target).unwrap(), "你好 世界");
    }

    #[test]
    fn test_apply_target_missing() {
        let engine = PatchEngine::new("/nonexistent/path");
        let rules = rule_set("packages/opencode/src/app.tsx", &[("Hello", "你好")]);

        let outcome = engine.apply(&rules, false);

        assert!(outcome.skipped, "目标文件不存在时应该跳过");
        assert_eq!(outcome.skip_reason, "目标文件不存在");
    }

    #[test]
    fn test_apply_empty_file_skips_without_io() {
        let engine = PatchEngine::new("/nonexistent/path");
        let rules = rule_set("", &[("Hello", "你好")]);

        let outcome = engine.apply(&rules, false);

        assert!(outcome.skipped, "空 file 时应该跳过");
        assert_eq!(outcome.counts.success, 0);
    }

    #[test]
    fn test_apply_empty_replacements() {
        let engine = PatchEngine::new("/some/path");
        let rules = rule_set("src/app.tsx", &[]);

        let outcome = engine.apply(&rules, false);

        assert!(outcome.skipped, "空 replacements 时应该跳过");
    }

    #[test]
    fn test_apply_no_match() {
        let root = TempDir::new().unwrap();
        let target = write_target(&root, "Goodbye World");

        let engine = PatchEngine::new(root.path());
        // 文件中不存在 "Hello"
        let rules = rule_set("packages/opencode/src/app.tsx", &[("Hello", "你好")]);

        let outcome = engine.apply(&rules, false);

        assert!(outcome.success);
        assert_eq!(outcome.counts.success, 0);
        assert_eq!(outcome.counts.failed, 1);
        // 无命中时不写入，文件保持原样
        assert_eq!(fs::read_to_string(&target).unwrap(), "Goodbye World");
    }

    #[test]
    fn test_apply_crlf_normalization() {
        let root = TempDir::new().unwrap();
        // 目标文件使用 CRLF 换行，规则使用 LF 换行
        let target = write_target(&root, "Hello\r\nWorld");

        let engine = PatchEngine::new(root.path());
        let rules = rule_set(
            "packages/opencode/src/app.tsx",
            &[("Hello\nWorld", "你好\n世界")],
        );

        let outcome = engine.apply(&rules, false);

        // CRLF 应该被规范化后匹配
        assert_eq!(
            outcome.counts.success, 1,
            "CRLF 应该被规范化后匹配, failed={}",
            outcome.counts.failed
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "你好\n世界");
    }

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let root = TempDir::new().unwrap();
        let target = write_target(&root, "Save / Save As / Save All");

        let engine = PatchEngine::new(root.path());
        let rules = rule_set("packages/opencode/src/app.tsx", &[("Save", "保存")]);

        let outcome = engine.apply(&rules, false);

        assert_eq!(outcome.counts.success, 1);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "保存 / 保存 As / 保存 All"
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let root = TempDir::new().unwrap();
        let target = write_target(&root, "Hello World");

        let engine = PatchEngine::new(root.path());
        let rules = rule_set(
            "packages/opencode/src/app.tsx",
            &[("Hello", "你好"), ("World", "世界")],
        );

        let first = engine.apply(&rules, false);
        assert_eq!(first.counts.success, 2);

        // 第二遍：原文已不存在，不应再有新的命中
        let second = engine.apply(&rules, false);
        assert!(second.success);
        assert_eq!(second.counts.success, 0);
        assert_eq!(second.counts.failed, 2);
        assert_eq!(fs::read_to_string(&target).unwrap(), "你好 世界");
    }
}
