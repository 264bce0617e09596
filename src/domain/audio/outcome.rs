//! Audio Context - 单次分割结果

use serde::{Deserialize, Serialize};

/// 单次分割尝试的结果
///
/// 每次尝试恰好产生一个变体，传输层异常也折叠为 `Failure`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SplitOutcome {
    Success {
        /// 远端写出的片段数量，0 表示未检测到静音
        split_count: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        /// 远端报告的输出文件路径
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        files: Vec<String>,
    },
    Failure {
        detail: String,
        /// 请求未得到服务的有效回应（连接失败、超时、响应体损坏）
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        transport: bool,
    },
}

impl SplitOutcome {
    pub fn success(split_count: u32) -> Self {
        Self::Success {
            split_count,
            message: None,
            files: Vec::new(),
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self::Failure {
            detail: detail.into(),
            transport: false,
        }
    }

    /// 传输层失败，服务本身没有给出判断
    pub fn transport_failure(detail: impl Into<String>) -> Self {
        Self::Failure {
            detail: detail.into(),
            transport: true,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn split_count(&self) -> Option<u32> {
        match self {
            Self::Success { split_count, .. } => Some(*split_count),
            Self::Failure { .. } => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { detail, .. } => Some(detail),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Failure { transport: true, .. })
    }
}
