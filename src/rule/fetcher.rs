//! Upstream rule listing fetcher
//! 远程规则目录拉取：
//! 1. 单次 GET，不重试、不缓存
//! 2. 传输失败、状态码异常、格式异常都以错误返回，任务一定会结束
//! 3. 响应体结构显式校验（必须是带 name 字段的对象数组）

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::catalog::json_kind;
use super::model::RuleDescriptor;
use crate::config::GlobalConfig;
use crate::error::{SyncError, SyncResult};

/// 规则目录来源
/// 比较流程只依赖该 trait，便于替换成其他实现
#[async_trait]
pub trait RuleListingSource: Send + Sync {
    /// 拉取 `path` 对应目录下的全部条目
    async fn list_rules(&self, path: &str) -> SyncResult<Vec<RuleDescriptor>>;
}

/// 基于 GitHub contents API 的目录拉取器
#[derive(Debug, Clone)]
pub struct GithubContentsClient {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl GithubContentsClient {
    pub fn new(config: &GlobalConfig) -> SyncResult<Self> {
        let mut builder = Client::builder();
        if config.http_timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.http_timeout));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        let base_url = Url::parse(&config.api_base_url)?;

        Ok(Self {
            client,
            base_url,
            user_agent: config.user_agent.clone(),
        })
    }

    /// 拼接完整请求地址
    /// 保留 base URL 中的路径前缀（如 GitHub Enterprise 的 `/api/v3`）
    pub fn endpoint(&self, path: &str) -> SyncResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SyncError::InvalidInput(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

#[async_trait]
impl RuleListingSource for GithubContentsClient {
    async fn list_rules(&self, path: &str) -> SyncResult<Vec<RuleDescriptor>> {
        let url = self.endpoint(path)?;
        debug!("fetching rule listing: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| SyncError::Network(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SyncError::Network(format!("reading body of {} failed: {}", url, e)))?;

        if !status.is_success() {
            let message = upstream_message(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            });
            warn!("upstream {} returned status {}: {}", url, status, message);
            return Err(SyncError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let descriptors = parse_listing(&body)?;
        debug!("received {} entries from {}", descriptors.len(), url);
        Ok(descriptors)
    }
}

/// 解析目录响应体
/// 非 JSON -> UpstreamFormat；结构不符 -> UpstreamShape
pub fn parse_listing(body: &[u8]) -> SyncResult<Vec<RuleDescriptor>> {
    let value: Value = serde_json::from_slice(body)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(ref obj) => {
            // GitHub 限流或错误时返回的是带 message 的对象
            let detail = obj
                .get("message")
                .and_then(Value::as_str)
                .map(|m| format!(": {}", m))
                .unwrap_or_default();
            return Err(SyncError::UpstreamShape(format!(
                "expected an array of entries, found an object{}",
                detail
            )));
        }
        other => {
            return Err(SyncError::UpstreamShape(format!(
                "expected an array of entries, found {}",
                json_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            match item.get("name") {
                Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(SyncError::UpstreamShape(format!(
                        "entry {} has a non-string name ({})",
                        index,
                        json_kind(other)
                    )));
                }
                None => {
                    return Err(SyncError::UpstreamShape(format!(
                        "entry {} ({}) has no name field",
                        index,
                        json_kind(&item)
                    )));
                }
            }
            serde_json::from_value(item).map_err(|e| {
                SyncError::UpstreamShape(format!("entry {} is malformed: {}", index, e))
            })
        })
        .collect()
}

// 从错误响应体中提取 GitHub 的 message 字段
fn upstream_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
