//! Batch Context - Aggregate Root

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BatchError;
use crate::domain::audio::AudioFileDescriptor;
use crate::domain::status;

/// 批处理阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPhase {
    /// 已创建，尚未开始
    Idle,
    /// 正在逐个分割
    Running,
    /// 全部成功
    Completed,
    /// 遇到第一个失败后停止
    Aborted,
    /// 调用方取消
    Cancelled,
}

impl BatchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchPhase::Idle => "idle",
            BatchPhase::Running => "running",
            BatchPhase::Completed => "completed",
            BatchPhase::Aborted => "aborted",
            BatchPhase::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BatchPhase::Completed | BatchPhase::Aborted | BatchPhase::Cancelled
        )
    }
}

/// 批处理聚合根
///
/// 不变量:
/// - `0 <= processed_files <= total_files`
/// - `running == false` 时没有在途的分割请求
/// - 一旦 `aborted`，`processed_files` 不再增加
/// - 文件快照在整个批次内不可变
///
/// 每次 "split all" 创建一个新实例，结束后丢弃，不跨批次复用
#[derive(Debug, Clone)]
pub struct BatchState {
    batch_id: Uuid,
    files: Arc<Vec<AudioFileDescriptor>>,
    phase: BatchPhase,
    processed_files: usize,
    current_index: usize,
    running: bool,
    in_flight: bool,
    last_status_message: String,
    aborted: bool,
    abort_reason: Option<String>,
    total_splits: u64,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl BatchState {
    /// 以文件快照创建批次，空列表会被拒绝
    pub fn new(files: Vec<AudioFileDescriptor>) -> Result<Self, BatchError> {
        if files.is_empty() {
            return Err(BatchError::EmptyBatch);
        }

        Ok(Self {
            batch_id: Uuid::new_v4(),
            files: Arc::new(files),
            phase: BatchPhase::Idle,
            processed_files: 0,
            current_index: 0,
            running: false,
            in_flight: false,
            last_status_message: String::new(),
            aborted: false,
            abort_reason: None,
            total_splits: 0,
            started_at: None,
            finished_at: None,
        })
    }

    /// Idle -> Running
    pub fn start(&mut self) -> Result<(), BatchError> {
        self.ensure_phase(BatchPhase::Idle, BatchPhase::Running)?;

        self.phase = BatchPhase::Running;
        self.running = true;
        self.processed_files = 0;
        self.current_index = 0;
        self.started_at = Some(Utc::now());
        Ok(())
    }

    /// 标记第 `index` 个文件开始处理，返回该文件描述
    ///
    /// 只能按顺序推进，且同一时刻最多一个在途请求
    pub fn begin_file(&mut self, index: usize) -> Result<AudioFileDescriptor, BatchError> {
        self.ensure_phase(BatchPhase::Running, BatchPhase::Running)?;
        if self.in_flight || index != self.processed_files || index >= self.files.len() {
            return Err(BatchError::OutOfOrder {
                expected: self.processed_files,
                actual: index,
            });
        }

        let file = self.files[index].clone();
        self.current_index = index;
        self.in_flight = true;
        self.last_status_message = status::processing_message(index, self.files.len(), &file.name);
        Ok(file)
    }

    /// 当前文件分割成功
    pub fn record_success(&mut self, split_count: u32) -> Result<(), BatchError> {
        self.ensure_in_flight(BatchPhase::Running)?;

        self.in_flight = false;
        self.processed_files = self.current_index + 1;
        self.total_splits += u64::from(split_count);
        Ok(())
    }

    /// 当前文件分割失败，停止整个批次
    pub fn abort(&mut self, detail: impl Into<String>) -> Result<(), BatchError> {
        self.ensure_in_flight(BatchPhase::Aborted)?;

        let detail = detail.into();
        let name = &self.files[self.current_index].name;
        self.last_status_message = status::stopped_message(name, &detail);
        self.abort_reason = Some(detail);
        self.aborted = true;
        self.finish(BatchPhase::Aborted);
        Ok(())
    }

    /// 所有文件处理完毕
    pub fn complete(&mut self) -> Result<(), BatchError> {
        self.ensure_phase(BatchPhase::Running, BatchPhase::Completed)?;
        if self.in_flight || self.processed_files != self.files.len() {
            return Err(BatchError::InvalidTransition {
                from: self.phase,
                to: BatchPhase::Completed,
            });
        }

        self.last_status_message = status::completed_message(self.files.len());
        self.finish(BatchPhase::Completed);
        Ok(())
    }

    /// 在两次请求之间取消，`processed_files` 保持最后完成的值
    pub fn cancel(&mut self) -> Result<(), BatchError> {
        self.ensure_phase(BatchPhase::Running, BatchPhase::Cancelled)?;
        if self.in_flight {
            return Err(BatchError::InvalidTransition {
                from: self.phase,
                to: BatchPhase::Cancelled,
            });
        }

        self.last_status_message =
            status::cancelled_message(self.processed_files, self.files.len());
        self.finish(BatchPhase::Cancelled);
        Ok(())
    }

    fn finish(&mut self, phase: BatchPhase) {
        self.phase = phase;
        self.running = false;
        self.in_flight = false;
        self.finished_at = Some(Utc::now());
    }

    fn ensure_phase(&self, expected: BatchPhase, to: BatchPhase) -> Result<(), BatchError> {
        if self.phase != expected {
            return Err(BatchError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        Ok(())
    }

    fn ensure_in_flight(&self, to: BatchPhase) -> Result<(), BatchError> {
        self.ensure_phase(BatchPhase::Running, to)?;
        if !self.in_flight {
            return Err(BatchError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        Ok(())
    }

    // Getters
    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }

    pub fn files(&self) -> &[AudioFileDescriptor] {
        &self.files
    }

    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    pub fn processed_files(&self) -> usize {
        self.processed_files
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_status_message(&self) -> &str {
        &self.last_status_message
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn abort_reason(&self) -> Option<&str> {
        self.abort_reason.as_deref()
    }

    pub fn total_splits(&self) -> u64 {
        self.total_splits
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}
