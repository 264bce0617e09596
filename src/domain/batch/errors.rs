//! Batch Context - Errors

use thiserror::Error;

use super::BatchPhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("批处理文件列表为空")]
    EmptyBatch,

    #[error("无效的状态转换: {from:?} -> {to:?}")]
    InvalidTransition { from: BatchPhase, to: BatchPhase },

    #[error("文件索引越序: 期望 {expected}, 实际 {actual}")]
    OutOfOrder { expected: usize, actual: usize },
}
