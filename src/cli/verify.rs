// ============================================================================
// OpenCode-i18n - CLI Verify 命令
// ============================================================================
//
// 文件: src/cli/verify.rs
// 职责: 汉化配置验证命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 验证流程编排（完整性/变量/模拟/覆盖率）
//   - ✅ 验证结果格式化输出
//   - ❌ 不应包含变量提取逻辑
//   - ❌ 不应包含文件分类逻辑
//   - ❌ 不应包含替换匹配逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::collections::HashMap;

use crate::cli::select_config_store;
use crate::core::coverage::CoverageAnalyzer;
use crate::core::patcher::PatchEngine;
use crate::core::variables::check_variables;
use crate::models::config::Config;
use crate::models::rule::TranslationRuleSet;
use crate::ui::summary;
use crate::utils::constants::upstream::SOURCE_SUBDIR;
use crate::utils::logger::Logger;
use crate::utils::text::{flatten, truncate};
use crate::{t, tf};

/// 原文/译文展示截断长度
const PREVIEW_CHARS: usize = 50;

/// 验证汉化配置完整性
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// 显示详细信息
    #[arg(short = 'd', long)]
    pub detailed: bool,

    /// 对每条规则做匹配预演
    #[arg(long)]
    pub dry_run: bool,
}

pub fn handle_verify(args: VerifyArgs) -> Result<()> {
    Logger::stage(t!("cli.verify.start"));

    let workspace_root = Config::get_workspace_root();
    if !workspace_root.exists() {
        anyhow::bail!(tf!("error.workspace_not_exist", workspace_root.display()));
    }

    let rule_sets = select_config_store()
        .load_all()
        .map_err(|e| anyhow::anyhow!(tf!("error.load_configs", e)))?;

    // [1/4] 配置完整性
    Logger::step(1, 4, t!("verify.integrity.step"));
    report_integrity(&rule_sets, args.detailed);

    // [2/4] 变量保护
    Logger::step(2, 4, t!("verify.variables.step"));
    report_variable_issues(&rule_sets, args.detailed);

    // [3/4] 模拟运行（可选）
    if args.dry_run {
        Logger::step(3, 4, t!("verify.dry_run.step"));
        report_dry_run(&rule_sets, &workspace_root);
    } else {
        Logger::step(3, 4, t!("verify.dry_run.skipped"));
    }

    // [4/4] 覆盖率
    Logger::step(4, 4, t!("verify.coverage.step"));
    let source_dir = workspace_root.join(SOURCE_SUBDIR);
    if source_dir.exists() {
        let report = CoverageAnalyzer::new(&workspace_root).analyze(&rule_sets);
        summary::print_coverage_report(&report, args.detailed);
    } else {
        Logger::detail(t!("verify.coverage.source_missing"));
    }

    Logger::success(t!("verify.done"));
    Ok(())
}

/// 统计规则文档与条目数量，detail 模式按分类展开
fn report_integrity(rule_sets: &[TranslationRuleSet], detailed: bool) {
    let total_entries: usize = rule_sets.iter().map(|r| r.replacements.len()).sum();

    let mut category_stats: HashMap<&str, usize> = HashMap::new();
    for rules in rule_sets {
        *category_stats.entry(rules.category.as_str()).or_insert(0) += rules.replacements.len();
    }

    Logger::detail(tf!("verify.integrity.configs", rule_sets.len()));
    Logger::detail(tf!("verify.integrity.entries", total_entries));

    if detailed {
        Logger::detail(t!("verify.integrity.category_stats"));
        let mut categories: Vec<_> = category_stats.into_iter().collect();
        categories.sort();
        for (category, count) in categories {
            let label = if category.is_empty() { "-" } else { category };
            Logger::detail(format!("  - {}: {}", label, count));
        }
    }
}

/// 逐条检查原文/译文的插值变量一致性
///
/// 检查是建议性的：只标记供人工复核，不影响应用流程。
fn report_variable_issues(rule_sets: &[TranslationRuleSet], detailed: bool) {
    let mut issues = 0usize;

    for rules in rule_sets {
        for replacement in rules.replacement_list() {
            let check = check_variables(&replacement.from, &replacement.to);
            if check.is_safe {
                continue;
            }
            issues += 1;

            if detailed {
                Logger::warn(format!("{}/{}", rules.category, rules.name));
                Logger::detail(tf!(
                    "verify.variables.original",
                    flatten(&truncate(&replacement.from, PREVIEW_CHARS))
                ));
                Logger::detail(tf!(
                    "verify.variables.translated",
                    flatten(&truncate(&replacement.to, PREVIEW_CHARS))
                ));
                Logger::detail(tf!("verify.variables.missing", check.missing.join(", ")));
            }
        }
    }

    if issues > 0 {
        Logger::warn(tf!("verify.variables.found", issues));
    } else {
        Logger::detail(t!("verify.variables.ok"));
    }
}

/// 用引擎的 dry-run 对每条规则做匹配预演
fn report_dry_run(rule_sets: &[TranslationRuleSet], workspace_root: &std::path::Path) {
    let engine = PatchEngine::new(workspace_root);

    let mut match_count = 0usize;
    let mut miss_count = 0usize;

    for rules in rule_sets {
        let outcome = engine.apply(rules, true);
        if outcome.skipped {
            // 目标缺失或规则惰性：全部条目按未匹配计
            miss_count += rules.replacements.len();
        } else {
            match_count += outcome.counts.success;
            miss_count += outcome.counts.failed;
        }
    }

    Logger::detail(tf!(
        "verify.dry_run.matched",
        match_count,
        match_count + miss_count
    ));
    if miss_count > 0 {
        Logger::warn(tf!("verify.dry_run.missing", miss_count));
    }
}
