//! 内部规则目录加载
//! 启动时一次性读取 TSLint / ESLint 映射表与排除列表，之后只读

use std::path::Path;
use serde_json::{Map, Value};
use tracing::debug;

use super::model::RuleName;
use crate::error::{SyncError, SyncResult};

pub const TSLINT_RULES_FILE: &str = "tslint_rules.json";
pub const ESLINT_RULES_FILE: &str = "eslint_rules.json";
pub const UNUSED_TSLINT_RULES_FILE: &str = "unused_tslint_rules.json";

/// 内部规则映射表：camelCase 规则名 -> 规则元数据（保持文件中的键顺序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalRuleMap {
    entries: Map<String, Value>,
}

impl InternalRuleMap {
    pub fn from_map(entries: Map<String, Value>) -> SyncResult<Self> {
        if entries.keys().any(|k| k.trim().is_empty()) {
            return Err(SyncError::Catalog("rule map contains an empty rule name".to_string()));
        }
        Ok(Self { entries })
    }

    /// 便于测试与内嵌使用：仅提供规则名，元数据为空对象
    pub fn from_names<I, S>(names: I) -> SyncResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(|n| (n.into(), Value::Object(Map::new())))
            .collect();
        Self::from_map(entries)
    }

    /// 规则名（按映射表顺序）
    pub fn keys(&self) -> Vec<RuleName> {
        self.entries.keys().map(|k| RuleName::new(k.as_str())).collect()
    }

    pub fn get(&self, name: &RuleName) -> Option<&Value> {
        self.entries.get(name.as_str())
    }

    pub fn contains(&self, name: &RuleName) -> bool {
        self.entries.contains_key(name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 规则目录：两张映射表 + TSLint 排除列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleCatalog {
    pub ts_rules: InternalRuleMap,
    pub es_rules: InternalRuleMap,
    /// 上游存在但刻意不跟踪的 TSLint 规则（dash-case）
    pub unused_ts_rules: Vec<String>,
}

impl RuleCatalog {
    pub fn new(ts_rules: InternalRuleMap, es_rules: InternalRuleMap, unused_ts_rules: Vec<String>) -> Self {
        Self {
            ts_rules,
            es_rules,
            unused_ts_rules,
        }
    }

    /// 从目录加载三个 JSON 文件
    pub async fn load(dir: &Path) -> SyncResult<Self> {
        let ts_rules = Self::load_rule_map(&dir.join(TSLINT_RULES_FILE)).await?;
        let es_rules = Self::load_rule_map(&dir.join(ESLINT_RULES_FILE)).await?;
        let unused_ts_rules = Self::load_exclusions(&dir.join(UNUSED_TSLINT_RULES_FILE)).await?;

        debug!(
            "rule catalog loaded from {}: tslint={}, eslint={}, unused tslint={}",
            dir.display(),
            ts_rules.len(),
            es_rules.len(),
            unused_ts_rules.len()
        );

        Ok(Self::new(ts_rules, es_rules, unused_ts_rules))
    }

    async fn read_json(path: &Path) -> SyncResult<Value> {
        let content = tokio::fs::read(path).await.map_err(|e| {
            SyncError::Catalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_slice(&content).map_err(|e| {
            SyncError::Catalog(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    async fn load_rule_map(path: &Path) -> SyncResult<InternalRuleMap> {
        match Self::read_json(path).await? {
            Value::Object(entries) => InternalRuleMap::from_map(entries).map_err(|e| {
                SyncError::Catalog(format!("{}: {}", path.display(), e))
            }),
            other => Err(SyncError::Catalog(format!(
                "{} must contain a JSON object, found {}",
                path.display(),
                json_kind(&other)
            ))),
        }
    }

    async fn load_exclusions(path: &Path) -> SyncResult<Vec<String>> {
        let Value::Array(items) = Self::read_json(path).await? else {
            return Err(SyncError::Catalog(format!(
                "{} must contain a JSON array of rule names",
                path.display()
            )));
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                other => Err(SyncError::Catalog(format!(
                    "{} contains a non-string entry ({})",
                    path.display(),
                    json_kind(&other)
                ))),
            })
            .collect()
    }
}

/// JSON 值类型名（错误信息用）
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
