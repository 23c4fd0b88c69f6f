// ============================================================================
// OpenCode-i18n - 变量保护检查
// ============================================================================
//
// 文件: src/core/variables.rs
// 职责: 插值变量占位符提取与原文/译文一致性校验
// 边界:
//   - ✅ {name} 占位符提取
//   - ✅ 复杂表达式过滤
//   - ✅ 多重集合一致性比较
//   - ❌ 不应阻断替换应用（仅供人工复核）
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use std::collections::HashMap;

/// 被判定为表达式而非简单变量的字符
const EXPRESSION_CHARS: &[char] = &[' ', '.', '"', '\'', '(', ')', '[', ']', '?'];

/// 变量保护检查结果
#[derive(Debug, Clone)]
pub struct VariableCheck {
    /// 原文与译文的变量多重集合是否一致
    pub is_safe: bool,
    /// 原文中有、译文中缺失（按出现次数计）的变量名
    pub missing: Vec<String>,
}

/// 提取文本中的简单变量 `{xxx}`
///
/// 只接受不含空格、点号、引号、括号等字符的候选——含这些字符的
/// `{...}` 视为代码表达式而非简单变量，排除在安全比较之外。
/// 嵌套的 `{` 会重新开始当前候选的收集。
pub fn extract_placeholders(s: &str) -> Vec<String> {
    let mut vars = Vec::new();
    let mut in_var = false;
    let mut current = String::new();

    for c in s.chars() {
        if c == '{' {
            in_var = true;
            current.clear();
        } else if c == '}' && in_var {
            if !current.chars().any(|v| EXPRESSION_CHARS.contains(&v)) {
                vars.push(current.clone());
            }
            in_var = false;
        } else if in_var {
            current.push(c);
        }
    }
    vars
}

/// 检查译文是否保留了原文的全部插值变量
///
/// 一致性按多重集合比较：变量名相同且出现次数相同，顺序无关。
/// 该检查仅用于标记需要人工复核的规则，不会阻止替换执行。
pub fn check_variables(from: &str, to: &str) -> VariableCheck {
    let from_vars = extract_placeholders(from);
    let to_vars = extract_placeholders(to);

    let mut available: HashMap<&str, usize> = HashMap::new();
    for v in &to_vars {
        *available.entry(v.as_str()).or_insert(0) += 1;
    }

    let mut missing = Vec::new();
    for v in &from_vars {
        match available.get_mut(v.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => missing.push(v.clone()),
        }
    }

    // 译文中多出的变量同样破坏一致性（例如误译出新的占位符）
    let extra = available.values().any(|count| *count > 0);

    VariableCheck {
        is_safe: missing.is_empty() && !extra,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_variables() {
        assert_eq!(extract_placeholders("Hi {name}!"), vec!["name"]);
        assert_eq!(
            extract_placeholders("{count} of {total}"),
            vec!["count", "total"]
        );
    }

    #[test]
    fn test_extract_filters_expressions() {
        // 含空格、点号、引号、括号的候选视为表达式，排除
        assert!(extract_placeholders("{items.length}").is_empty());
        assert!(extract_placeholders("{a ? b : c}").is_empty());
        assert!(extract_placeholders(r#"{t("key")}"#).is_empty());
        assert!(extract_placeholders("{list[0]}").is_empty());
    }

    #[test]
    fn test_extract_nested_brace_restarts() {
        // 嵌套 { 重新开始收集，只保留最内层候选
        assert_eq!(extract_placeholders("{outer{inner}}"), vec!["inner"]);
    }

    #[test]
    fn test_check_agreement_is_safe() {
        let check = check_variables("Hi {name}", "你好 {name}");
        assert!(check.is_safe);
        assert!(check.missing.is_empty());
    }

    #[test]
    fn test_check_detects_loss() {
        let check = check_variables("Hi {name}", "你好");
        assert!(!check.is_safe);
        assert_eq!(check.missing, vec!["name"]);
    }

    #[test]
    fn test_check_order_irrelevant() {
        let check = check_variables("{a} and {b}", "{b} 和 {a}");
        assert!(check.is_safe);
    }

    #[test]
    fn test_check_multiplicity() {
        // 原文出现两次，译文只保留一次，缺一次
        let check = check_variables("{n} + {n}", "{n}");
        assert!(!check.is_safe);
        assert_eq!(check.missing, vec!["n"]);
    }

    #[test]
    fn test_check_extra_variable_unsafe() {
        let check = check_variables("Hello", "你好 {name}");
        assert!(!check.is_safe);
        assert!(check.missing.is_empty());
    }
}
