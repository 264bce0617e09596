//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::audio::SplitConfig;
use crate::infrastructure::adapters::HttpServiceConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 远端扫描 / 分割服务配置
    #[serde(default)]
    pub service: ServiceConfig,

    /// 默认分割参数
    #[serde(default)]
    pub split: SplitConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 远端服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// 服务基础 URL
    #[serde(default = "default_service_url")]
    pub url: String,

    /// 请求超时时间（秒），需覆盖单个长音频的分割耗时
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    600
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl ServiceConfig {
    /// 转换为 HTTP 客户端配置
    pub fn http_config(&self) -> HttpServiceConfig {
        HttpServiceConfig {
            base_url: self.url.clone(),
            timeout_secs: self.timeout_secs,
            connect_timeout_secs: self.connect_timeout_secs,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
