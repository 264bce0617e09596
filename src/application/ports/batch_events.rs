//! Batch Event Port - 批处理进度事件
//!
//! 编排器只通过该端口向外推送事件，不依赖任何渲染框架

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 批处理事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum BatchEvent {
    BatchStarted {
        batch_id: Uuid,
        total_files: usize,
    },
    FileStarted {
        batch_id: Uuid,
        index: usize,
        name: String,
        message: String,
    },
    FileSplit {
        batch_id: Uuid,
        index: usize,
        name: String,
        splits: u32,
        processed_files: usize,
    },
    BatchCompleted {
        batch_id: Uuid,
        total_files: usize,
        total_splits: u64,
        message: String,
    },
    BatchAborted {
        batch_id: Uuid,
        index: usize,
        name: String,
        reason: String,
        processed_files: usize,
        message: String,
    },
    BatchCancelled {
        batch_id: Uuid,
        processed_files: usize,
        total_files: usize,
        message: String,
    },
}

impl BatchEvent {
    pub fn batch_id(&self) -> Uuid {
        match self {
            BatchEvent::BatchStarted { batch_id, .. }
            | BatchEvent::FileStarted { batch_id, .. }
            | BatchEvent::FileSplit { batch_id, .. }
            | BatchEvent::BatchCompleted { batch_id, .. }
            | BatchEvent::BatchAborted { batch_id, .. }
            | BatchEvent::BatchCancelled { batch_id, .. } => *batch_id,
        }
    }

    /// 批次结束事件（之后不会再有同一批次的事件）
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BatchEvent::BatchCompleted { .. }
                | BatchEvent::BatchAborted { .. }
                | BatchEvent::BatchCancelled { .. }
        )
    }
}

/// Batch Event Publisher Port
pub trait BatchEventPublisherPort: Send + Sync {
    /// 发布事件，没有订阅者时静默丢弃
    fn publish(&self, event: BatchEvent);
}
