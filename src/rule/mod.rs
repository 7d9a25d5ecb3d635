//! 规则模块：负责上游目录拉取、规则名规范化、差异计算与报告
pub mod model;
pub mod catalog;
pub mod fetcher;
pub mod normalizer;
pub mod differ;
pub mod report;

// 导出核心接口
pub use self::model::{
    CaseTransform, LintTool, RuleDescriptor, RuleName, SourceProfile, to_camel_case, to_dash_case,
};
pub use self::catalog::{InternalRuleMap, RuleCatalog};
pub use self::fetcher::{GithubContentsClient, RuleListingSource, parse_listing};
pub use self::normalizer::{normalize, rule_stem};
pub use self::differ::{RuleDiff, diff, difference, missing_only};
pub use self::report::ComparisonReport;
