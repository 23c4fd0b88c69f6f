// ============================================================================
// OpenCode-i18n - 结果汇总展示
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 引擎结构化输出（应用结果 / 覆盖率报告）的终端表格渲染
// 边界:
//   - ✅ 应用结果表格渲染
//   - ✅ 覆盖率报告渲染
//   - ❌ 不应包含替换/扫描逻辑
//   - ❌ 不应包含数据模型定义
//   - ❌ 不应修改任何文件
//
// ============================================================================

use anyhow::Result;

use crate::core::coverage::CoverageReport;
use crate::core::patcher::ApplyOutcome;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::tf;

/// 展示上限：--detail 之外默认列出的纯代码文件数
const CODE_ONLY_PREVIEW_LIMIT: usize = 5;

/// 打印逐文档应用结果表格
pub fn print_apply_results_table(outcomes: &[ApplyOutcome], detail: bool) -> Result<()> {
    Logger::info("");
    Logger::info("───────────────────────────────────────");

    for outcome in outcomes {
        if outcome.skipped {
            // 跳过不是错误，默认只在 detail 模式展示
            if detail {
                Logger::detail(format!(
                    "{} [{}] {}",
                    Colors::dim(icons::SKIP),
                    outcome.name,
                    outcome.skip_reason
                ));
            }
            continue;
        }

        if let Some(err) = &outcome.error {
            Logger::detail(format!(
                "{} [{}] {}",
                Colors::error(icons::ERROR),
                outcome.name,
                err
            ));
            continue;
        }

        let total = outcome.counts.success + outcome.counts.failed;
        let icon = if outcome.counts.failed == 0 {
            Colors::success(icons::SUCCESS)
        } else {
            Colors::warn(icons::WARNING)
        };
        Logger::detail(format!(
            "{} [{}] {}",
            icon,
            outcome.name,
            tf!("apply.result_hits", outcome.counts.success, total)
        ));
    }

    Logger::info("───────────────────────────────────────");
    Ok(())
}

/// 打印覆盖率报告
pub fn print_coverage_report(report: &CoverageReport, detail: bool) {
    let total_files = report.ui_file_count + report.code_only_file_count;
    Logger::detail(tf!(
        "coverage.files",
        total_files,
        report.ui_file_count,
        report.code_only_file_count
    ));
    Logger::detail(tf!("coverage.configured", report.configured_file_count));
    Logger::detail(tf!(
        "coverage.percent",
        format!("{:.1}", report.coverage_percent)
    ));

    if detail && !report.code_only_files.is_empty() {
        Logger::info("");
        Logger::detail(tf!(
            "coverage.code_only_header",
            report.code_only_file_count
        ));
        for (index, file) in report.code_only_files.iter().enumerate() {
            if index >= CODE_ONLY_PREVIEW_LIMIT {
                Logger::detail(tf!(
                    "coverage.code_only_more",
                    report.code_only_files.len() - CODE_ONLY_PREVIEW_LIMIT
                ));
                break;
            }
            Logger::detail(format!("- {}", Colors::dim(file)));
        }
    }
}
