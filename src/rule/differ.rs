//! 上游规则集合与内部映射表的差异计算

use std::collections::HashSet;

use super::model::RuleName;

/// 差异结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDiff {
    /// 上游有、内部无（按上游顺序）
    pub missing: Vec<RuleName>,
    /// 内部有、上游无（按映射表顺序）
    pub deprecated: Vec<RuleName>,
}

impl RuleDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.deprecated.is_empty()
    }
}

/// `source` 中不在 `target` 里的元素，保持 `source` 顺序
pub fn difference(source: &[RuleName], target: &[RuleName]) -> Vec<RuleName> {
    let target: HashSet<&RuleName> = target.iter().collect();
    source
        .iter()
        .filter(|item| !target.contains(item))
        .cloned()
        .collect()
}

/// 双向差异
pub fn diff(upstream: &[RuleName], internal: &[RuleName]) -> RuleDiff {
    RuleDiff {
        missing: difference(upstream, internal),
        deprecated: difference(internal, upstream),
    }
}

/// 仅计算缺失方向
pub fn missing_only(upstream: &[RuleName], internal: &[RuleName]) -> Vec<RuleName> {
    difference(upstream, internal)
}
