// ============================================================================
// OpenCode-i18n - 规则文档加载器
// ============================================================================
//
// 文件: src/core/store.rs
// 职责: 汉化规则文档的来源抽象和批量加载
// 边界:
//   - ✅ 规则文档来源抽象（内嵌 / 目录）
//   - ✅ 规则文档解析和校验
//   - ✅ 加载错误定义
//   - ❌ 不应包含替换应用逻辑
//   - ❌ 不应包含路径解析逻辑
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::rule::TranslationRuleSet;

/// 内嵌的默认规则包，随二进制发布
const EMBEDDED_DOCS: &[(&str, &str)] = &[
    (
        "cli-flags.json",
        include_str!("../../configs/cli-flags.json"),
    ),
    (
        "dialog-model.json",
        include_str!("../../configs/dialog-model.json"),
    ),
    (
        "dialog-session.json",
        include_str!("../../configs/dialog-session.json"),
    ),
    ("tips.json", include_str!("../../configs/tips.json")),
];

/// 规则文档加载错误
///
/// 任何一个文档不可读或格式非法，整批加载即告失败；
/// 不会向下游传递部分加载结果。
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("读取规则文档失败 {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("解析规则文档失败 {id}: {source}")]
    Parse {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("规则目录不可读 {dir}: {source}")]
    ListDir {
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

/// 规则文档来源抽象：枚举文档标识 + 读取文档内容
pub trait RuleSource {
    /// 列出全部文档标识（按字典序）
    fn list(&self) -> Result<Vec<String>, LoadError>;

    /// 读取指定文档的内容
    fn read(&self, id: &str) -> Result<String, LoadError>;
}

/// 内嵌规则包来源
pub struct EmbeddedSource;

impl RuleSource for EmbeddedSource {
    fn list(&self) -> Result<Vec<String>, LoadError> {
        Ok(EMBEDDED_DOCS.iter().map(|(id, _)| id.to_string()).collect())
    }

    fn read(&self, id: &str) -> Result<String, LoadError> {
        EMBEDDED_DOCS
            .iter()
            .find(|(doc_id, _)| *doc_id == id)
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| LoadError::Io {
                id: id.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "内嵌文档不存在"),
            })
    }
}

/// 磁盘目录来源，加载目录下的全部 *.json 文档
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl RuleSource for DirSource {
    fn list(&self) -> Result<Vec<String>, LoadError> {
        let entries = fs::read_dir(&self.root).map_err(|e| LoadError::ListDir {
            dir: self.root.display().to_string(),
            source: e,
        })?;

        let mut ids = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                if let Some(name) = path.file_name() {
                    ids.push(name.to_string_lossy().to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<String, LoadError> {
        fs::read_to_string(self.root.join(id)).map_err(|e| LoadError::Io {
            id: id.to_string(),
            source: e,
        })
    }
}

/// 规则文档加载器
pub struct ConfigStore {
    source: Box<dyn RuleSource>,
}

impl ConfigStore {
    /// 使用内嵌规则包
    pub fn embedded() -> Self {
        Self {
            source: Box::new(EmbeddedSource),
        }
    }

    /// 使用磁盘目录来源
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            source: Box::new(DirSource::new(dir)),
        }
    }

    /// 加载来源中的全部规则文档
    ///
    /// 逐个文档独立解析；任何一个解析失败即整体失败（fail-fast），
    /// 字段缺省的合法文档（如 `{}`）解析为空字段规则集，不是错误。
    pub fn load_all(&self) -> Result<Vec<TranslationRuleSet>, LoadError> {
        let mut rule_sets = Vec::new();

        for id in self.source.list()? {
            let content = self.source.read(&id)?;
            let mut rules: TranslationRuleSet =
                serde_json::from_str(&content).map_err(|e| LoadError::Parse {
                    id: id.clone(),
                    source: e,
                })?;
            rules.name = id;
            rule_sets.push(rules);
        }

        Ok(rule_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_load_valid_document() {
        let dir = TempDir::new().unwrap();
        write_doc(
            &dir,
            "app.json",
            r#"{
                "file": "src/app.tsx",
                "replacements": {
                    "Hello": "你好",
                    "World": "世界"
                }
            }"#,
        );

        let rule_sets = ConfigStore::from_dir(dir.path()).load_all().unwrap();
        assert_eq!(rule_sets.len(), 1);
        assert_eq!(rule_sets[0].file, "src/app.tsx");
        assert_eq!(rule_sets[0].name, "app.json");
        assert_eq!(rule_sets[0].replacements.len(), 2);
        assert_eq!(
            rule_sets[0].replacements.get("Hello"),
            Some(&"你好".to_string())
        );
    }

    #[test]
    fn test_load_missing_directory() {
        let store = ConfigStore::from_dir("/nonexistent/path/configs");
        assert!(matches!(store.load_all(), Err(LoadError::ListDir { .. })));
    }

    #[test]
    fn test_load_invalid_json_fails_whole_batch() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "good.json", r#"{"file": "src/a.tsx"}"#);
        write_doc(&dir, "invalid.json", "{ invalid json }");

        // 单个文档非法，整批加载失败
        let result = ConfigStore::from_dir(dir.path()).load_all();
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_load_empty_document() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "empty.json", "{}");

        let rule_sets = ConfigStore::from_dir(dir.path()).load_all().unwrap();
        assert_eq!(rule_sets.len(), 1);
        assert!(rule_sets[0].file.is_empty());
        assert!(rule_sets[0].replacements.is_empty());
        assert!(rule_sets[0].is_inert());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dir = TempDir::new().unwrap();
        write_doc(
            &dir,
            "extra.json",
            r#"{"file": "src/a.tsx", "comment": "维护备注", "replacements": {}}"#,
        );

        let rule_sets = ConfigStore::from_dir(dir.path()).load_all().unwrap();
        assert_eq!(rule_sets[0].file, "src/a.tsx");
    }

    #[test]
    fn test_list_only_json_sorted() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "b.json", "{}");
        write_doc(&dir, "a.json", "{}");
        write_doc(&dir, "notes.txt", "ignore me");

        let source = DirSource::new(dir.path());
        assert_eq!(source.list().unwrap(), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_embedded_bundle_loads() {
        // 内嵌规则包必须始终可加载
        let rule_sets = ConfigStore::embedded().load_all().unwrap();
        assert!(!rule_sets.is_empty());
        for rules in &rule_sets {
            assert!(!rules.name.is_empty());
        }
    }
}
