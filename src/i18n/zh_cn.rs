// ============================================================================
// OpenCode-i18n - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文界面文案定义
// 边界:
//   - ✅ 中文翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 应用补丁相关
    ("cli.apply.start", "应用汉化补丁"),
    ("apply.loaded_rule_sets", "已加载 {} 个规则文档，共 {} 条替换"),
    ("apply.dry_run_mode", "Dry-run 模式：仅预览匹配结果，不写入任何文件"),
    ("apply.applying", "正在应用汉化补丁..."),
    ("apply.no_rule_sets", "没有可用的规则文档"),
    ("apply.summary", "完成！共命中 {}/{} 条替换"),
    ("apply.result_hits", "{}/{} 条命中"),
    ("apply.skipped_sets", "跳过 {} 个规则集"),
    ("apply.failed_sets", "{} 个规则集写入失败"),
    // 验证相关
    ("cli.verify.start", "验证汉化配置"),
    ("verify.integrity.step", "验证配置完整性..."),
    ("verify.integrity.configs", "配置文件: {} 个"),
    ("verify.integrity.entries", "翻译条目: {} 条"),
    ("verify.integrity.category_stats", "分类统计:"),
    ("verify.variables.step", "检查变量保护..."),
    ("verify.variables.original", "原文: {}"),
    ("verify.variables.translated", "译文: {}"),
    ("verify.variables.missing", "缺失变量: {}"),
    ("verify.variables.found", "发现 {} 处变量问题"),
    ("verify.variables.ok", "变量保护验证通过"),
    ("verify.dry_run.step", "模拟运行检查..."),
    ("verify.dry_run.skipped", "跳过模拟运行（使用 --dry-run 启用）"),
    ("verify.dry_run.matched", "替换: {}/{} 可匹配"),
    ("verify.dry_run.missing", "{} 条翻译在源码中找不到匹配"),
    ("verify.coverage.step", "检查汉化覆盖率..."),
    ("verify.coverage.source_missing", "源码目录不存在，跳过覆盖率检查"),
    ("verify.done", "验证完成"),
    // 覆盖率报告相关
    ("coverage.files", "源码文件: {} 个 (UI: {}, 纯代码: {})"),
    ("coverage.configured", "已配置: {} 个"),
    ("coverage.percent", "覆盖率: {}% (基于包含 UI 字符串的文件)"),
    ("coverage.code_only_header", "纯代码文件 ({} 个，无需翻译):"),
    ("coverage.code_only_more", "... 还有 {} 个"),
    // 初始化相关
    ("init.start", "初始化 opencode-i18n 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖现有配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    // 错误相关
    ("error.workspace_not_exist", "上游仓库目录不存在: {}"),
    ("error.load_configs", "加载汉化配置失败: {}"),
];
