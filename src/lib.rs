//! rulesync - TSLint / ESLint 规则目录同步检查工具

// 导出全局错误类型
pub use self::error::{SyncError, SyncResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    ComparisonReport, GithubContentsClient, InternalRuleMap, LintTool, RuleCatalog,
    RuleDescriptor, RuleListingSource, RuleName,
};

// 导出比较模块核心接口
pub use self::comparator::{
    RuleComparator,
    init_comparator,
    init_comparator_with,
    init_comparator_with_config,
    compare_to_eslint,
    compare_to_tslint,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod comparator;
