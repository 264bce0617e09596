//! 远端分割服务的共享 HTTP 配置与错误体解析

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// HTTP 服务客户端配置
#[derive(Debug, Clone)]
pub struct HttpServiceConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），分割长音频可能较慢
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    pub connect_timeout_secs: u64,
}

impl Default for HttpServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 600,
            connect_timeout_secs: 5,
        }
    }
}

impl HttpServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// 拼接端点 URL，容忍 base_url 末尾的 `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// 构建 reqwest 客户端
    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build()
    }
}

/// 非 2xx 响应体 `{ "detail": ... }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// 从失败响应体中提取 `detail`
///
/// 字符串原样返回；结构化内容（如参数校验错误列表）输出为紧凑 JSON；
/// 无法解析时返回 `HTTP {status}`
pub(crate) fn error_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody {
            detail: serde_json::Value::Null,
        })
        | Err(_) => format!("HTTP {}", status),
        Ok(ErrorBody { detail }) => detail.to_string(),
    }
}
