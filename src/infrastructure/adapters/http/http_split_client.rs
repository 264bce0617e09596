//! HTTP Split Client - 调用远端静音分割引擎
//!
//! POST {base_url}/split
//! Request:  {"file_path", "silence_threshold", "silence_duration", "padding",
//!            "min_segment_length", "use_subfolder"}
//! Response: {"splits": n, "message"?, "files"?}，失败时 {"detail": "..."}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::service_client::{error_detail, HttpServiceConfig};
use crate::application::ports::SplitServicePort;
use crate::domain::audio::{SplitConfig, SplitOutcome};

/// 分割请求体 (JSON)
#[derive(Debug, Serialize)]
struct SplitHttpRequest<'a> {
    file_path: &'a str,
    silence_threshold: f64,
    silence_duration: f64,
    padding: f64,
    min_segment_length: f64,
    use_subfolder: bool,
}

impl<'a> SplitHttpRequest<'a> {
    fn new(file_path: &'a str, config: &SplitConfig) -> Self {
        Self {
            file_path,
            silence_threshold: config.silence_threshold_db,
            silence_duration: config.min_silence_duration_secs,
            padding: config.padding_secs,
            min_segment_length: config.min_segment_length_secs,
            use_subfolder: config.use_subfolder,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SplitHttpResponse {
    splits: u32,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    files: Vec<String>,
}

/// HTTP 分割客户端
///
/// 所有失败（包括传输层）都折叠为 `SplitOutcome::Failure`，从不重试
pub struct HttpSplitClient {
    client: Client,
    config: HttpServiceConfig,
}

impl HttpSplitClient {
    pub fn new(config: HttpServiceConfig) -> Result<Self, reqwest::Error> {
        let client = config.build_client()?;
        Ok(Self { client, config })
    }

    /// 复用已有的 reqwest 客户端（连接池共享）
    pub fn with_client(client: Client, config: HttpServiceConfig) -> Self {
        Self { client, config }
    }

    fn split_url(&self) -> String {
        self.config.endpoint("split")
    }
}

fn transport_detail(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else {
        format!("connection error: {}", e)
    }
}

#[async_trait]
impl SplitServicePort for HttpSplitClient {
    async fn split(&self, file_path: &str, config: &SplitConfig) -> SplitOutcome {
        let request = SplitHttpRequest::new(file_path, config);

        tracing::debug!(
            url = %self.split_url(),
            file_path = %file_path,
            silence_threshold = request.silence_threshold,
            silence_duration = request.silence_duration,
            "Sending split request"
        );

        let response = match self.client.post(self.split_url()).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(file_path = %file_path, error = %e, "Split request failed");
                return SplitOutcome::transport_failure(transport_detail(&e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(status, &body);
            tracing::warn!(file_path = %file_path, status = %status, detail = %detail, "Split rejected");
            return SplitOutcome::failure(detail);
        }

        match response.json::<SplitHttpResponse>().await {
            Ok(body) => {
                tracing::debug!(
                    file_path = %file_path,
                    splits = body.splits,
                    message = ?body.message,
                    "Split response received"
                );
                SplitOutcome::Success {
                    split_count: body.splits,
                    message: body.message,
                    files: body.files,
                }
            }
            Err(e) if e.is_timeout() => SplitOutcome::transport_failure(transport_detail(&e)),
            Err(e) => SplitOutcome::transport_failure(format!("invalid response: {}", e)),
        }
    }
}
