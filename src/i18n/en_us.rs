// ============================================================================
// OpenCode-i18n - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Apply related
    ("cli.apply.start", "Applying translation patches"),
    (
        "apply.loaded_rule_sets",
        "Loaded {} rule documents, {} replacements total",
    ),
    (
        "apply.dry_run_mode",
        "Dry-run mode: previewing matches, no files will be written",
    ),
    ("apply.applying", "Applying translation patches..."),
    ("apply.no_rule_sets", "No rule documents available"),
    ("apply.summary", "Done! {}/{} replacements matched"),
    ("apply.result_hits", "{}/{} matched"),
    ("apply.skipped_sets", "{} rule sets skipped"),
    ("apply.failed_sets", "{} rule sets failed to write"),
    // Verify related
    ("cli.verify.start", "Verifying translation configuration"),
    ("verify.integrity.step", "Verifying configuration integrity..."),
    ("verify.integrity.configs", "Rule documents: {}"),
    ("verify.integrity.entries", "Translation entries: {}"),
    ("verify.integrity.category_stats", "Per-category statistics:"),
    ("verify.variables.step", "Checking variable preservation..."),
    ("verify.variables.original", "Original: {}"),
    ("verify.variables.translated", "Translated: {}"),
    ("verify.variables.missing", "Missing variables: {}"),
    ("verify.variables.found", "Found {} variable issues"),
    ("verify.variables.ok", "Variable preservation verified"),
    ("verify.dry_run.step", "Simulating apply..."),
    (
        "verify.dry_run.skipped",
        "Simulation skipped (enable with --dry-run)",
    ),
    ("verify.dry_run.matched", "Replacements: {}/{} matchable"),
    (
        "verify.dry_run.missing",
        "{} translations have no match in the source tree",
    ),
    ("verify.coverage.step", "Checking translation coverage..."),
    (
        "verify.coverage.source_missing",
        "Source directory not found, coverage check skipped",
    ),
    ("verify.done", "Verification complete"),
    // Coverage report related
    ("coverage.files", "Source files: {} (UI: {}, code-only: {})"),
    ("coverage.configured", "Configured: {}"),
    (
        "coverage.percent",
        "Coverage: {}% (based on files containing UI strings)",
    ),
    (
        "coverage.code_only_header",
        "Code-only files ({}, no translation needed):",
    ),
    ("coverage.code_only_more", "... {} more"),
    // Init related
    ("init.start", "Initializing opencode-i18n configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite the existing config file",
    ),
    ("init.config_created", "Config file created: {}"),
    // Error messages
    (
        "error.workspace_not_exist",
        "Upstream checkout directory does not exist: {}",
    ),
    ("error.load_configs", "Failed to load translation configs: {}"),
];
