//! Scan Service Port - 远端文件夹扫描服务抽象
//!
//! 定义扫描接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioFileDescriptor;
use crate::domain::status::{error_message, CONNECT_FAILED_MESSAGE};

/// 扫描错误
///
/// 失败时不返回任何部分结果
#[derive(Debug, Error)]
pub enum ScanError {
    /// 服务返回非 2xx，携带其 `detail`
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ScanError {
    /// 人类可读的失败详情
    pub fn detail(&self) -> String {
        self.to_string()
    }

    /// 是否为传输层失败（服务不可达、超时、响应体损坏）
    pub fn is_transport(&self) -> bool {
        !matches!(self, ScanError::Rejected(_))
    }

    /// 对应的状态行
    pub fn status_message(&self) -> String {
        if self.is_transport() {
            CONNECT_FAILED_MESSAGE.to_string()
        } else {
            error_message(&self.detail())
        }
    }
}

/// Scan Service Port
#[async_trait]
pub trait ScanServicePort: Send + Sync {
    /// 扫描文件夹，按服务返回的顺序给出音频文件
    ///
    /// 空路径（含纯空白）不发起请求，直接返回空列表
    async fn scan(&self, folder_path: &str) -> Result<Vec<AudioFileDescriptor>, ScanError>;
}
