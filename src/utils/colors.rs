// ============================================================================
// OpenCode-i18n - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和主题管理
// 边界:
//   - ✅ 终端颜色代码定义
//   - ✅ 颜色输出格式化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

/// ANSI 颜色代码
pub mod ansi {
    /// 重置颜色
    pub const RESET: &str = "\x1b[0m";

    /// 前景色
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 为文本添加颜色
    pub fn colorize(text: &str, color: &str) -> String {
        format!("{}{}{}", color, text, ansi::RESET)
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> String {
        Self::colorize(text, ansi::CYAN)
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> String {
        Self::colorize(text, ansi::YELLOW)
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> String {
        Self::colorize(text, ansi::RED)
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> String {
        Self::colorize(text, ansi::GREEN)
    }

    /// 次要信息颜色 (灰色)
    pub fn dim(text: &str) -> String {
        Self::colorize(text, ansi::GRAY)
    }
}
