//! Scan Commands - 扫描相关命令

use crate::domain::audio::AudioFileDescriptor;

/// 扫描文件夹命令
#[derive(Debug, Clone)]
pub struct ScanFolderCommand {
    pub folder_path: String,
}

impl ScanFolderCommand {
    pub fn new(folder_path: impl Into<String>) -> Self {
        Self {
            folder_path: folder_path.into(),
        }
    }
}

/// 扫描文件夹响应
#[derive(Debug, Clone)]
pub struct ScanFolderResponse {
    /// 按服务返回顺序排列，即显示与批处理顺序
    pub files: Vec<AudioFileDescriptor>,
    pub status_message: String,
}
