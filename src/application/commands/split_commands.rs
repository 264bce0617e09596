//! Split Commands - 分割相关命令

use crate::domain::audio::{AudioFileDescriptor, SplitConfig, SplitOutcome};

/// 单文件分割命令
#[derive(Debug, Clone)]
pub struct SplitFileCommand {
    pub file_path: String,
    pub config: SplitConfig,
}

/// 单文件分割响应
#[derive(Debug, Clone)]
pub struct SplitFileResponse {
    pub outcome: SplitOutcome,
    pub status_message: String,
}

/// 全部分割命令
///
/// `files` 是批次开始时的快照，运行期间不会重新扫描
#[derive(Debug, Clone)]
pub struct SplitAllCommand {
    pub files: Vec<AudioFileDescriptor>,
    pub config: SplitConfig,
}
