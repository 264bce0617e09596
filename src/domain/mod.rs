//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Audio Context: 音频文件描述与分割参数
//! - Batch Context: 顺序批处理状态机

pub mod audio;
pub mod batch;

// 共享的状态文本格式化
pub mod status;

pub use audio::{AudioFileDescriptor, SplitConfig, SplitOutcome};
pub use batch::{BatchError, BatchPhase, BatchState};
pub use status::format_size;
