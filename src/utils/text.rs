// ============================================================================
// OpenCode-i18n - 文本工具
// ============================================================================
//
// 文件: src/utils/text.rs
// 职责: 终端展示用的文本处理
// 边界:
//   - ✅ 文本截断和转义处理
//   - ❌ 不应包含替换/匹配逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 截断过长文本用于展示，按字符（而非字节）截断，避免切断多字节字符
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// 将换行符替换为可见转义，便于单行展示译文原文
pub fn flatten(s: &str) -> String {
    s.replace('\n', "\\n").replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Hello", 50), "Hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 中文按字符截断，不能在字节中间截断
        assert_eq!(truncate("会话历史记录管理", 4), "会话历史...");
    }

    #[test]
    fn test_flatten_newlines() {
        assert_eq!(flatten("a\nb\r\nc"), "a\\nb\\r\\nc");
    }
}
