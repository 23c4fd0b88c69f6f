// ============================================================================
// OpenCode-i18n - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 终端展示组件模块入口
// 边界:
//   - ✅ UI 子模块导出
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含汉化引擎实现
//
// ============================================================================

pub mod summary;
