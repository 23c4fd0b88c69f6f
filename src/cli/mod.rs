// ============================================================================
// OpenCode-i18n - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含汉化引擎逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod apply;
pub mod init;
pub mod verify;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs};
use apply::{handle_apply, ApplyArgs};
use init::{handle_init, InitArgs};
use verify::{handle_verify, VerifyArgs};

/// OpenCode-i18n - OpenCode Chinese translation manager
#[derive(Debug, Parser)]
#[command(name = "opencode-i18n")]
#[command(about = "Patch and verify Chinese translations for the OpenCode source tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Upstream opencode checkout directory
    #[arg(short = 'C', long, global = true)]
    pub workspace_root: Option<String>,

    /// External rule document directory (defaults to the embedded bundle)
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply translation rule sets to the upstream source tree
    Apply(ApplyArgs),
    /// Verify rule integrity, variable safety and coverage
    Verify(VerifyArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    match cli.command {
        Commands::Apply(args) => handle_apply(args),
        Commands::Verify(args) => handle_verify(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        workspace_root: cli.workspace_root.clone(),
        config_dir: cli.config_dir.clone(),
        language: cli.language.clone(),
    }
}

/// 按配置选择规则文档来源（外部目录优先，缺省用内嵌规则包）
pub(crate) fn select_config_store() -> crate::core::ConfigStore {
    match Config::get_config_dir() {
        Some(dir) => crate::core::ConfigStore::from_dir(dir),
        None => crate::core::ConfigStore::embedded(),
    }
}
