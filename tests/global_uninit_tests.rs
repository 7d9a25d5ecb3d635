//! 未初始化全局比较器时的无参接口（独立测试二进制，不做初始化）

use rulesync::{SyncError, compare_to_eslint, compare_to_tslint};

#[tokio::test]
async fn test_global_operations_before_init_fail() {
    let eslint = compare_to_eslint().await;
    assert!(
        matches!(eslint, Err(SyncError::InvalidInput(ref msg)) if msg.contains("not initialized")),
        "got {:?}",
        eslint
    );
    assert!(matches!(compare_to_tslint().await, Err(SyncError::InvalidInput(_))));
}
