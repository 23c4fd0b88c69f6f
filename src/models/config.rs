// ============================================================================
// OpenCode-i18n - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 工具配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含汉化规则加载逻辑
//   - ❌ 不应包含替换应用逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::utils::constants::CONFIG_FILE_NAME;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// OpenCode-i18n 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 上游源码配置
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// 汉化规则来源配置
    #[serde(default)]
    pub translation: TranslationSourceConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 界面国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 上游源码配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// 上游 opencode 仓库检出目录
    #[serde(default)]
    pub root: String,
    /// 覆盖率扫描时排除的目录或文件模式
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 汉化规则来源配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslationSourceConfig {
    /// 外部规则文档目录；为空时使用内嵌规则包
    #[serde(default)]
    pub config_dir: String,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default)]
    pub colored: bool,
}

/// 界面国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default)]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub workspace_root: Option<String>,
    pub config_dir: Option<String>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认上游仓库目录
    fn default_workspace_root() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// 获取默认忽略模式
    fn default_ignore_patterns() -> Vec<String> {
        vec![
            ".git".to_string(),
            "dist".to_string(),
            "node_modules".to_string(),
        ]
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "zh_cn".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config()?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    fn load_config() -> anyhow::Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // 如果配置文件不存在，使用默认配置
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(workspace_root) = args.workspace_root {
            config.workspace.root = workspace_root;
        }
        if let Some(config_dir) = args.config_dir {
            config.translation.config_dir = config_dir;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &PathBuf) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &PathBuf) -> anyhow::Result<()> {
        let default_config = Self::default();
        default_config.save_to_file(config_path)?;
        Ok(())
    }

    /// 获取上游仓库根目录（带默认值）
    pub fn get_workspace_root() -> PathBuf {
        match Self::get_workspace_root_from_config() {
            Ok(root) => root,
            _ => Self::default_workspace_root(),
        }
    }

    /// 从配置获取上游仓库根目录（可能失败）
    fn get_workspace_root_from_config() -> anyhow::Result<PathBuf> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        let root = &config.workspace.root;
        if root.is_empty() || root == "." {
            Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
        } else {
            Ok(PathBuf::from(root))
        }
    }

    /// 获取外部规则文档目录（为空表示使用内嵌规则包）
    pub fn get_config_dir() -> Option<PathBuf> {
        let global_config = GLOBAL_CONFIG.get()?;
        let config = global_config.read().ok()?;

        if config.translation.config_dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(&config.translation.config_dir))
        }
    }

    /// 获取忽略模式列表
    pub fn get_ignore_patterns() -> anyhow::Result<Vec<String>> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.workspace.ignore.clone())
    }

    /// 检查路径是否应该被忽略
    pub fn should_ignore_path(path: &str) -> anyhow::Result<bool> {
        // node_modules 始终被忽略
        if path.contains("node_modules") {
            return Ok(true);
        }

        let ignore_patterns = Self::get_ignore_patterns()?;

        for pattern in &ignore_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                // 直接匹配
                if glob_pattern.matches(path) {
                    return Ok(true);
                }
                // 也检查路径的开头部分是否匹配模式
                if path.starts_with(pattern) {
                    return Ok(true);
                }
                // 检查路径中是否包含该模式
                if path.contains(pattern) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::get_verbose_from_config() {
            Ok(verbose) => verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 从配置获取详细输出设置（可能失败）
    fn get_verbose_from_config() -> anyhow::Result<bool> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.output.verbose)
    }

    /// 获取是否彩色输出
    pub fn get_colored() -> anyhow::Result<bool> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.output.colored)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig {
                root: ".".to_string(),
                ignore: Self::default_ignore_patterns(),
            },
            translation: TranslationSourceConfig::default(),
            output: OutputConfig {
                verbose: Self::default_verbose(),
                colored: Self::default_colored(),
            },
            i18n: I18nConfig {
                language: Self::default_language(),
            },
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            ignore: Config::default_ignore_patterns(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
