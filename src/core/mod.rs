// ============================================================================
// OpenCode-i18n - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 汉化引擎核心逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含输出格式化逻辑
//
// ============================================================================

pub mod coverage;
pub mod patcher;
pub mod resolver;
pub mod store;
pub mod variables;

// 重新导出常用类型
pub use coverage::{CoverageAnalyzer, CoverageReport};
pub use patcher::{ApplyOutcome, PatchEngine, ReplacementCounts};
pub use store::{ConfigStore, LoadError};
pub use variables::VariableCheck;
