//! Batch Context - 批处理限界上下文
//!
//! 职责:
//! - 一次 "split all" 的文件快照与进度计数
//! - Idle -> Running -> {Completed | Aborted | Cancelled} 状态机

mod aggregate;
mod errors;

pub use aggregate::{BatchPhase, BatchState};
pub use errors::BatchError;
