// ============================================================================
// OpenCode-i18n - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量和约定路径定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 上游仓库路径约定定义
//   - ✅ 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "OPENCODE-I18N";

/// 工具配置文件名
pub const CONFIG_FILE_NAME: &str = "opencode-i18n.toml";

/// 上游仓库路径约定
pub mod upstream {
    /// 汉化目标所在的包前缀（规则文件中的 file 字段相对于此目录书写）
    pub const PACKAGE_PREFIX: &str = "packages/opencode";

    /// 覆盖率扫描的源码子目录（相对上游仓库根目录）
    pub const SOURCE_SUBDIR: &str = "packages/opencode/src";

    /// 参与覆盖率统计的 UI 框架源文件扩展名
    pub const UI_SOURCE_EXTENSIONS: &[&str] = &["tsx", "jsx"];
}

/// 输出图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "⚠";
    /// 阶段图标
    pub const STAGE: &str = "▶";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 条目图标
    pub const ITEM: &str = "●";
    /// 箭头图标
    pub const ARROW: &str = "→";
}
