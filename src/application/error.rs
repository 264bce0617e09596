//! 应用层错误定义
//!
//! 统一的命令错误类型。远端服务的预期失败不走这里：
//! 扫描失败是 `ScanError`，分割失败是 `SplitOutcome::Failure`

use thiserror::Error;

use crate::domain::batch::BatchError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建状态无效错误
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

impl From<BatchError> for ApplicationError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::EmptyBatch => Self::validation("No files to split"),
            other => Self::invalid_state(other.to_string()),
        }
    }
}
