//! 比较模块：规则同步检查的流程编排
pub mod global;
pub mod comparator;

// 导出核心接口
pub use self::comparator::RuleComparator;
pub use self::global::{
    init_comparator,
    init_comparator_with,
    init_comparator_with_config,
    compare_to_eslint,
    compare_to_tslint,
};
