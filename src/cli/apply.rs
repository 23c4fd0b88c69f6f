// ============================================================================
// OpenCode-i18n - CLI Apply 命令
// ============================================================================
//
// 文件: src/cli/apply.rs
// 职责: 汉化补丁应用命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用替换引擎执行应用
//   - ✅ 应用结果格式化输出
//   - ❌ 不应包含替换匹配逻辑
//   - ❌ 不应包含规则解析逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::select_config_store;
use crate::core::patcher::{ApplyOutcome, PatchEngine};
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 应用汉化补丁到上游源码树
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// 只计算匹配结果，不写入任何文件（预演模式）
    #[arg(long)]
    pub dry_run: bool,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息（含跳过的规则集）
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_apply(args: ApplyArgs) -> Result<()> {
    Logger::stage(t!("cli.apply.start"));

    let workspace_root = Config::get_workspace_root();
    if !workspace_root.exists() {
        anyhow::bail!(tf!("error.workspace_not_exist", workspace_root.display()));
    }

    // 加载规则文档：任一文档非法即中止，不做部分应用
    let rule_sets = select_config_store()
        .load_all()
        .map_err(|e| anyhow::anyhow!(tf!("error.load_configs", e)))?;

    if rule_sets.is_empty() {
        Logger::warn(t!("apply.no_rule_sets"));
        return Ok(());
    }

    let total_entries: usize = rule_sets.iter().map(|r| r.replacements.len()).sum();
    Logger::info(tf!("apply.loaded_rule_sets", rule_sets.len(), total_entries));

    if args.dry_run {
        Logger::info(t!("apply.dry_run_mode"));
    }

    // 逐个规则集应用；单个文件的 I/O 失败不中止其余规则集
    let engine = PatchEngine::new(&workspace_root);
    let outcomes: Vec<ApplyOutcome> = rule_sets
        .iter()
        .map(|rules| engine.apply(rules, args.dry_run))
        .collect();

    output_results(&args.format, &outcomes, args.detail)?;

    // 汇总命中/跳过/失败
    let matched: usize = outcomes.iter().map(|o| o.counts.success).sum();
    let attempted: usize = outcomes
        .iter()
        .map(|o| o.counts.success + o.counts.failed)
        .sum();
    let skipped = outcomes.iter().filter(|o| o.skipped).count();
    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();

    if skipped > 0 {
        Logger::info(tf!("apply.skipped_sets", skipped));
    }
    if failed > 0 {
        Logger::error(tf!("apply.failed_sets", failed));
        std::process::exit(1);
    }

    Logger::success(tf!("apply.summary", matched, attempted));
    Ok(())
}

/// 按格式输出应用结果
fn output_results(format: &str, outcomes: &[ApplyOutcome], detail: bool) -> Result<()> {
    match format {
        "json" => {
            let json_output = serde_json::json!({
                "results": outcomes,
                "count": outcomes.len()
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        }
        _ => {
            summary::print_apply_results_table(outcomes, detail)?;
        }
    }
    Ok(())
}
