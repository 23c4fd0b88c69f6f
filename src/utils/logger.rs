// ============================================================================
// OpenCode-i18n - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 日志输出和格式化工具
// 边界:
//   - ✅ 日志级别管理
//   - ✅ 日志格式化输出
//   - ✅ 阶段标题输出
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含日志内容生成
//
// ============================================================================

use super::colors::Colors;
use super::constants::icons;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info("[I18N]"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::warn("[WARN]"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success("[I18N]"), msg.as_ref());
    }

    /// 阶段标题，如 "▶ 验证汉化配置"
    pub fn stage<S: AsRef<str>>(msg: S) {
        println!("\n{} {}", Colors::info(icons::STAGE), msg.as_ref());
    }

    /// 阶段内的步骤标题，如 "[2/4] 检查变量保护..."
    pub fn step<S: AsRef<str>>(current: usize, total: usize, msg: S) {
        println!("\n[{}/{}] {}", current, total, msg.as_ref());
    }

    /// 步骤内的缩进明细行
    pub fn detail<S: AsRef<str>>(msg: S) {
        println!("  {}", msg.as_ref());
    }
}
