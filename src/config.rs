//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 默认的 GitHub API 地址
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
/// GitHub API 要求请求携带 User-Agent
pub const DEFAULT_USER_AGENT: &str = "tslint-eslint-rules";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // GitHub API 根地址（测试时可指向本地服务）
    pub api_base_url: String,
    // 请求头 User-Agent
    pub user_agent: String,
    // 超时配置（单位：秒，0 表示不限制）
    pub http_timeout: u64,
    // 是否使用系统代理（HTTP_PROXY 等环境变量）
    pub use_system_proxy: bool,
    // 规则目录所在文件夹
    pub catalog_dir: PathBuf,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: 30,
            use_system_proxy: true,
            catalog_dir: PathBuf::from("data"),
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn use_system_proxy(mut self, enabled: bool) -> Self {
        self.config.use_system_proxy = enabled;
        self
    }

    pub fn catalog_dir(mut self, path: PathBuf) -> Self {
        self.config.catalog_dir = path;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_github() {
        let config = ConfigManager::get_default();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.user_agent, "tslint-eslint-rules");
        assert_eq!(config.http_timeout, 30);
        assert!(config.use_system_proxy);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder_overrides_fields() {
        let config = ConfigManager::custom()
            .api_base_url("http://127.0.0.1:8080")
            .user_agent("rulesync-test")
            .http_timeout(0)
            .catalog_dir(PathBuf::from("fixtures"))
            .verbose(true)
            .build();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, "rulesync-test");
        assert_eq!(config.http_timeout, 0);
        assert_eq!(config.catalog_dir, PathBuf::from("fixtures"));
        assert!(config.verbose);
    }
}
