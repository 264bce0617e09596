//! HTTP Scan Client - 调用远端文件夹扫描服务
//!
//! POST {base_url}/scan
//! Request:  {"folder_path": "..."}
//! Response: {"files": [{"name", "path", "size"}]}，失败时 {"detail": "..."}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::service_client::{error_detail, HttpServiceConfig};
use crate::application::ports::{ScanError, ScanServicePort};
use crate::domain::audio::AudioFileDescriptor;

#[derive(Debug, Serialize)]
struct ScanHttpRequest<'a> {
    folder_path: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScanHttpResponse {
    files: Vec<AudioFileDescriptor>,
}

/// HTTP 扫描客户端
pub struct HttpScanClient {
    client: Client,
    config: HttpServiceConfig,
}

impl HttpScanClient {
    pub fn new(config: HttpServiceConfig) -> Result<Self, ScanError> {
        let client = config
            .build_client()
            .map_err(|e| ScanError::NetworkError(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// 复用已有的 reqwest 客户端（连接池共享）
    pub fn with_client(client: Client, config: HttpServiceConfig) -> Self {
        Self { client, config }
    }

    fn scan_url(&self) -> String {
        self.config.endpoint("scan")
    }
}

#[async_trait]
impl ScanServicePort for HttpScanClient {
    async fn scan(&self, folder_path: &str) -> Result<Vec<AudioFileDescriptor>, ScanError> {
        if folder_path.trim().is_empty() {
            tracing::debug!("Empty folder path, no scan request sent");
            return Ok(Vec::new());
        }

        tracing::debug!(url = %self.scan_url(), folder_path = %folder_path, "Sending scan request");

        let response = self
            .client
            .post(self.scan_url())
            .json(&ScanHttpRequest { folder_path })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScanError::Timeout
                } else if e.is_connect() {
                    ScanError::NetworkError(format!("Cannot connect to scan service: {}", e))
                } else {
                    ScanError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(status, &body);
            tracing::warn!(status = %status, detail = %detail, "Scan rejected");
            return Err(ScanError::Rejected(detail));
        }

        let body: ScanHttpResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ScanError::Timeout
            } else {
                ScanError::InvalidResponse(e.to_string())
            }
        })?;

        tracing::debug!(count = body.files.len(), "Scan response received");
        Ok(body.files)
    }
}
