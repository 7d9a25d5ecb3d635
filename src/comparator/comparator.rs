//! 比较器核心：拉取 -> 规范化 -> 差异 -> 报告
use std::sync::Arc;

use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::SyncResult;
use crate::rule::{
    ComparisonReport, GithubContentsClient, LintTool, RuleCatalog, RuleListingSource,
    diff, missing_only, normalize,
};

/// 规则比较器
/// 持有目录来源与只读的规则目录，两条流水线互不影响
#[derive(Clone)]
pub struct RuleComparator {
    source: Arc<dyn RuleListingSource>,
    catalog: Arc<RuleCatalog>,
}

impl RuleComparator {
    pub fn new(source: Arc<dyn RuleListingSource>, catalog: Arc<RuleCatalog>) -> Self {
        Self { source, catalog }
    }

    /// 根据配置创建：加载规则目录并构建 GitHub 客户端
    pub async fn from_config(config: &GlobalConfig) -> SyncResult<Self> {
        let catalog = RuleCatalog::load(&config.catalog_dir).await?;
        let client = GithubContentsClient::new(config)?;
        Ok(Self::new(Arc::new(client), Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// ESLint：双向比较
    pub async fn compare_to_eslint(&self) -> SyncResult<ComparisonReport> {
        self.compare(LintTool::EsLint).await
    }

    /// TSLint：先去掉排除项，只报告缺失方向
    pub async fn compare_to_tslint(&self) -> SyncResult<ComparisonReport> {
        self.compare(LintTool::TsLint).await
    }

    /// 同时比较两个工具，各自结果独立返回
    pub async fn compare_all(&self) -> (SyncResult<ComparisonReport>, SyncResult<ComparisonReport>) {
        tokio::join!(self.compare_to_eslint(), self.compare_to_tslint())
    }

    pub async fn compare(&self, tool: LintTool) -> SyncResult<ComparisonReport> {
        let descriptors = self.source.list_rules(&tool.contents_path()).await?;
        let profile = tool.profile();

        let report = match tool {
            LintTool::EsLint => {
                let upstream = normalize(&descriptors, &profile, None);
                let result = diff(&upstream, &self.catalog.es_rules.keys());
                ComparisonReport::new(tool, result.missing, Some(result.deprecated))
            }
            LintTool::TsLint => {
                let upstream = normalize(&descriptors, &profile, Some(self.catalog.unused_ts_rules.as_slice()));
                let missing = missing_only(&upstream, &self.catalog.ts_rules.keys());
                ComparisonReport::new(tool, missing, None)
            }
        };

        debug!(
            "{} comparison finished: {} upstream entries, {} missing, {} deprecated",
            tool,
            descriptors.len(),
            report.missing.len(),
            report.deprecated.as_ref().map_or(0, Vec::len)
        );

        Ok(report)
    }

    /// 比较并打印报告（报告后附空行）
    pub async fn print(&self, tool: LintTool) -> SyncResult<()> {
        let report = self.compare(tool).await?;
        println!("{}\n", report);
        Ok(())
    }
}
