//! 全局比较器单例管理
//! 初始化一次后即可通过无参接口调用
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::comparator::RuleComparator;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{SyncError, SyncResult};
use crate::rule::LintTool;

/// 全局比较器实例
static GLOBAL_COMPARATOR: Lazy<Arc<OnceCell<RuleComparator>>> = Lazy::new(|| {
    Arc::new(OnceCell::new())
});

/// 初始化全局比较器（默认配置）
pub async fn init_comparator() -> SyncResult<()> {
    init_comparator_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局比较器
pub async fn init_comparator_with_config(config: GlobalConfig) -> SyncResult<()> {
    if GLOBAL_COMPARATOR.get().is_some() {
        return Ok(());
    }

    let comparator = RuleComparator::from_config(&config).await?;
    init_comparator_with(comparator)
}

/// 使用已构建的比较器初始化
/// 只能初始化一次，重复初始化返回 InvalidInput
pub fn init_comparator_with(comparator: RuleComparator) -> SyncResult<()> {
    GLOBAL_COMPARATOR.set(comparator).map_err(|_| {
        SyncError::InvalidInput("comparator already initialized".to_string())
    })
}

/// 获取全局比较器
pub(crate) fn get_global_comparator() -> SyncResult<&'static RuleComparator> {
    GLOBAL_COMPARATOR.get().ok_or_else(|| {
        SyncError::InvalidInput("comparator not initialized, call init_comparator first".to_string())
    })
}

/// 比较 ESLint 规则并打印报告
pub async fn compare_to_eslint() -> SyncResult<()> {
    get_global_comparator()?.print(LintTool::EsLint).await
}

/// 比较 TSLint 规则并打印报告
pub async fn compare_to_tslint() -> SyncResult<()> {
    get_global_comparator()?.print(LintTool::TsLint).await
}
