// ============================================================================
// OpenCode-i18n - 覆盖率分析器
// ============================================================================
//
// 文件: src/core/coverage.rs
// 职责: 上游源码树扫描、UI 文件启发式分类与覆盖率计算
// 边界:
//   - ✅ 源码树递归扫描
//   - ✅ UI 文件 / 纯代码文件分类（内容启发式）
//   - ✅ 覆盖率计算和上限截断
//   - ❌ 不应解析 UI 框架语法（仅基于文本信号）
//   - ❌ 不应包含替换应用逻辑
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

use crate::models::config::Config;
use crate::models::rule::TranslationRuleSet;
use crate::utils::constants::upstream::{SOURCE_SUBDIR, UI_SOURCE_EXTENSIONS};

/// 硬编码 title 属性的常见英文首字母（启发式白名单）
const TITLE_LEADING_LETTERS: &[char] = &['S', 'C', 'E', 'A', 'M'];

/// 已知承载 UI 文案的导出标识白名单
const UI_EXPORT_ALLOWLIST: &[&str] = &[
    "DialogSelect",
    "DialogSession",
    "DialogModel",
    "DialogProvider",
    "DialogExport",
    "DialogHelp",
    "DialogMcp",
    "DialogStash",
    "DialogStatus",
    "tips",
    "Autocomplete",
];

/// 匹配字面 title 属性（title="S... 等），动态形式 title={...} 另行排除
fn title_literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let letters: String = TITLE_LEADING_LETTERS.iter().collect();
        Regex::new(&format!(r#"title="[{}]"#, letters)).expect("固定模式必然合法")
    })
}

/// 覆盖率报告
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// 含 UI 文案的源文件数
    pub ui_file_count: usize,
    /// 纯代码源文件数（无需翻译）
    pub code_only_file_count: usize,
    /// 规则集中声明的去重目标文件数
    pub configured_file_count: usize,
    /// 覆盖率百分比（基于 UI 文件数，上限 100）
    pub coverage_percent: f64,
    /// 纯代码文件相对路径列表（供 --detail 展示）
    pub code_only_files: Vec<String>,
}

/// 覆盖率分析器，持有上游仓库根目录
pub struct CoverageAnalyzer {
    source_root: PathBuf,
}

impl CoverageAnalyzer {
    pub fn new<P: AsRef<Path>>(source_root: P) -> Self {
        Self {
            source_root: source_root.as_ref().to_path_buf(),
        }
    }

    /// 扫描源码树并结合规则集计算汉化覆盖率
    ///
    /// 分类是内容的纯函数，同一输入必然得到同一报告；
    /// 扫描中不可读的文件按纯代码计，不中断整体扫描。
    pub fn analyze(&self, rule_sets: &[TranslationRuleSet]) -> CoverageReport {
        let source_dir = self.source_root.join(SOURCE_SUBDIR);

        let mut ui_file_count = 0usize;
        let mut code_only_files = Vec::new();

        for entry in WalkDir::new(&source_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();

            let relative = path
                .strip_prefix(&source_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();
            if Config::should_ignore_path(&relative).unwrap_or(false) {
                continue;
            }

            if !is_ui_source_file(path) {
                continue;
            }

            // 不可读的文件按纯代码计，单个坏文件不中断扫描
            let content = fs::read_to_string(path).unwrap_or_default();

            if has_ui_strings(&content) {
                ui_file_count += 1;
            } else {
                code_only_files.push(relative);
            }
        }
        code_only_files.sort();

        // 统计规则集中声明的去重目标文件
        let configured: HashSet<&str> = rule_sets
            .iter()
            .filter(|rules| !rules.file.is_empty())
            .map(|rules| rules.file.as_str())
            .collect();
        let configured_file_count = configured.len();

        // 防止除以 0；规则可能引用已被上游删除的文件，上限截断到 100
        let denominator = ui_file_count.max(1);
        let coverage_percent =
            (configured_file_count as f64 / denominator as f64 * 100.0).min(100.0);

        CoverageReport {
            ui_file_count,
            code_only_file_count: code_only_files.len(),
            configured_file_count,
            coverage_percent,
            code_only_files,
        }
    }
}

/// 文件扩展名是否属于参与统计的 UI 框架源文件
fn is_ui_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| UI_SOURCE_EXTENSIONS.contains(&ext))
}

/// 判断文件内容是否包含需要翻译的硬编码 UI 字符串
///
/// 不解析语法，只看三类文本信号，任一命中即视为 UI 文件：
/// 1. 含 CJK 统一表意文字（已翻译标记，说明该文件需要汉化配置）；
/// 2. 含字面 title 属性且首字母是常见英文大写（并且不含动态 title={）；
/// 3. 导出了白名单内的 UI 组件/标识。
pub fn has_ui_strings(content: &str) -> bool {
    // 1. CJK 统一表意文字区
    if content.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)) {
        return true;
    }

    // 2. 硬编码的英文 title 属性
    if title_literal_regex().is_match(content) && !content.contains("title={") {
        return true;
    }

    // 3. 白名单内的导出组件
    for component in UI_EXPORT_ALLOWLIST {
        if content.contains(&format!("export function {}", component))
            || content.contains(&format!("export const {}", component))
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn rule_set(file: &str) -> TranslationRuleSet {
        let mut replacements = HashMap::new();
        replacements.insert("Hello".to_string(), "你好".to_string());
        TranslationRuleSet {
            file: file.to_string(),
            category: String::new(),
            replacements,
            name: format!("{}.json", file.len()),
        }
    }

    fn write_source(root: &TempDir, relative: &str, content: &str) {
        let path = root.path().join(SOURCE_SUBDIR).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_classify_cjk_is_ui() {
        assert!(has_ui_strings("const label = \"会话\""));
    }

    #[test]
    fn test_classify_literal_title_is_ui() {
        assert!(has_ui_strings(r#"<Dialog title="Session History" />"#));
        // 白名单外的首字母不算
        assert!(!has_ui_strings(r#"<Dialog title="x-custom" />"#));
    }

    #[test]
    fn test_classify_dynamic_title_is_code() {
        // 同时存在动态 title={...} 时按纯代码处理
        assert!(!has_ui_strings(
            r#"<Dialog title="Session" /><Other title={label} />"#
        ));
    }

    #[test]
    fn test_classify_export_allowlist_is_ui() {
        assert!(has_ui_strings("export function DialogSession() {}"));
        assert!(has_ui_strings("export const tips = []"));
        assert!(!has_ui_strings("export function helper() {}"));
    }

    #[test]
    fn test_classify_plain_code() {
        assert!(!has_ui_strings("const x = compute(1, 2);"));
    }

    #[test]
    fn test_analyze_counts_and_coverage() {
        let root = TempDir::new().unwrap();
        write_source(&root, "app.tsx", "export function DialogSession() {}");
        write_source(&root, "util.tsx", "const x = 1;");
        write_source(&root, "helper.ts", "ignored extension");

        let analyzer = CoverageAnalyzer::new(root.path());
        let report = analyzer.analyze(&[rule_set("src/app.tsx")]);

        assert_eq!(report.ui_file_count, 1);
        assert_eq!(report.code_only_file_count, 1);
        assert_eq!(report.configured_file_count, 1);
        assert!((report.coverage_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.code_only_files, vec!["util.tsx"]);
    }

    #[test]
    fn test_analyze_clamps_at_100() {
        let root = TempDir::new().unwrap();
        write_source(&root, "app.tsx", "export const tips = []");

        // 两条规则指向不同文件（其一已被上游删除），超过 UI 文件数
        let analyzer = CoverageAnalyzer::new(root.path());
        let report = analyzer.analyze(&[rule_set("src/app.tsx"), rule_set("src/deleted.tsx")]);

        assert_eq!(report.configured_file_count, 2);
        assert_eq!(report.ui_file_count, 1);
        assert!((report.coverage_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_empty_tree_no_division_by_zero() {
        let root = TempDir::new().unwrap();

        let analyzer = CoverageAnalyzer::new(root.path());
        let report = analyzer.analyze(&[]);

        assert_eq!(report.ui_file_count, 0);
        assert!((report.coverage_percent - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_skips_inert_rule_sets() {
        let root = TempDir::new().unwrap();
        write_source(&root, "a.tsx", "你好");
        write_source(&root, "b.tsx", "世界");

        let analyzer = CoverageAnalyzer::new(root.path());
        let report = analyzer.analyze(&[rule_set(""), rule_set("src/a.tsx")]);

        // 无目标文件的规则集不参与统计
        assert_eq!(report.configured_file_count, 1);
        assert_eq!(report.ui_file_count, 2);
        assert!((report.coverage_percent - 50.0).abs() < f64::EPSILON);
    }
}
