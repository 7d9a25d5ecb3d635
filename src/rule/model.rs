//! 规则数据模型定义
//! 仅存储规则数据与命名转换，不涉及网络或文件 IO

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// 小写字母后紧跟大写字母的位置，用于 camelCase -> dash-case
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z])([A-Z])").expect("static regex")
});

// 连字符后紧跟的小写字母，用于 dash-case -> camelCase
static DASH_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-([a-z])").expect("static regex")
});

/// dash-case 转 camelCase：`no-extra-semi` -> `noExtraSemi`
pub fn to_camel_case(name: &str) -> String {
    DASH_LETTER
        .replace_all(name, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// camelCase 转 dash-case：`noExtraSemi` -> `no-extra-semi`
pub fn to_dash_case(name: &str) -> String {
    CAMEL_BOUNDARY.replace_all(name, "$1-$2").to_lowercase()
}

/// 上游目录条目（GitHub contents API 返回的单个文件描述）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl RuleDescriptor {
    /// 仅按文件名构造（其余字段为空）
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            kind: None,
            sha: None,
            size: None,
            download_url: None,
        }
    }
}

/// 规范化后的规则名（camelCase，作为内部映射表的键）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleName(String);

impl RuleName {
    pub fn new(camel: impl Into<String>) -> Self {
        Self(camel.into())
    }

    /// 从 dash-case 名称构造
    pub fn from_dash(dash: &str) -> Self {
        Self(to_camel_case(dash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 展示用的 dash-case 形式
    pub fn to_dash(&self) -> String {
        to_dash_case(&self.0)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 上游文件名的大小写形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// 上游文件名已是 camelCase
    Identity,
    /// 上游文件名是 dash-case，需要转换
    DashToCamel,
}

impl CaseTransform {
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseTransform::Identity => name.to_string(),
            CaseTransform::DashToCamel => to_camel_case(name),
        }
    }
}

/// 上游文件命名约定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProfile {
    /// 规则源文件扩展名（含点）
    pub extension: &'static str,
    /// 去掉扩展名后再剥离的文件名后缀（如 TSLint 的 `Rule`）
    pub name_suffix: Option<&'static str>,
    pub case: CaseTransform,
}

/// 被比较的 lint 工具
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintTool {
    TsLint,
    EsLint,
}

impl LintTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            LintTool::TsLint => "TSLint",
            LintTool::EsLint => "ESLint",
        }
    }

    /// 上游 `owner/repo`
    pub fn repository(&self) -> &'static str {
        match self {
            LintTool::TsLint => "palantir/tslint",
            LintTool::EsLint => "eslint/eslint",
        }
    }

    /// 上游仓库中规则目录
    pub fn rules_dir(&self) -> &'static str {
        match self {
            LintTool::TsLint => "src/rules",
            LintTool::EsLint => "lib/rules",
        }
    }

    /// contents API 路径：`/repos/<owner>/<repo>/contents/<dir>`
    pub fn contents_path(&self) -> String {
        format!("/repos/{}/contents/{}", self.repository(), self.rules_dir())
    }

    /// 规则文档地址（报告标题中使用）
    pub fn docs_url(&self) -> &'static str {
        match self {
            LintTool::TsLint => "http://palantir.github.io/tslint/rules",
            LintTool::EsLint => "http://eslint.org/docs/rules",
        }
    }

    pub fn profile(&self) -> SourceProfile {
        match self {
            LintTool::TsLint => SourceProfile {
                extension: ".ts",
                name_suffix: Some("Rule"),
                case: CaseTransform::Identity,
            },
            LintTool::EsLint => SourceProfile {
                extension: ".js",
                name_suffix: None,
                case: CaseTransform::DashToCamel,
            },
        }
    }

    /// 是否同时计算“内部有、上游无”的方向
    pub fn reports_deprecated(&self) -> bool {
        matches!(self, LintTool::EsLint)
    }
}

impl fmt::Display for LintTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
