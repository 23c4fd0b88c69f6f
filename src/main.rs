// ============================================================================
// OpenCode-i18n - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序启动、全局配置初始化和 CLI 分发
// 边界:
//   - ✅ 模块声明
//   - ✅ 全局配置初始化
//   - ✅ 顶层错误处理和退出码
//   - ❌ 不应包含命令实现逻辑
//   - ❌ 不应包含汉化引擎逻辑
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use models::config::Config;
use utils::logger::Logger;

fn main() {
    if let Err(e) = Config::initialize() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }

    if let Err(e) = cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
