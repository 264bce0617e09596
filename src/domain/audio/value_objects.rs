//! Audio Context - Value Objects

use serde::{Deserialize, Serialize};

/// 扫描服务返回的音频文件描述
///
/// 以 `path` 作为标识；批处理按位置索引，不按路径去重
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFileDescriptor {
    /// 文件名（含扩展名）
    pub name: String,
    /// 绝对路径，使用平台原生分隔符
    pub path: String,
    /// 文件大小（字节）
    pub size: u64,
}

impl AudioFileDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
        }
    }
}

/// 静音分割参数
///
/// 本地不做校验，参数是否合法由远端分割服务判断并以失败详情返回。
/// 字段名与远端接口及配置文件 `[split]` 段保持一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// 静音阈值（dB），通常为负数
    #[serde(rename = "silence_threshold")]
    pub silence_threshold_db: f64,

    /// 最短静音时长（秒）
    #[serde(rename = "silence_duration")]
    pub min_silence_duration_secs: f64,

    /// 片段两端保留的填充（秒）
    #[serde(rename = "padding")]
    pub padding_secs: f64,

    /// 最短片段长度（秒），更短的片段由远端合并
    #[serde(rename = "min_segment_length")]
    pub min_segment_length_secs: f64,

    /// 是否将输出写入以源文件命名的子目录
    pub use_subfolder: bool,
}

pub const DEFAULT_SILENCE_THRESHOLD_DB: f64 = -30.0;
pub const DEFAULT_SILENCE_DURATION_SECS: f64 = 1.0;
pub const DEFAULT_PADDING_SECS: f64 = 0.5;
pub const DEFAULT_MIN_SEGMENT_LENGTH_SECS: f64 = 20.0;

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            silence_threshold_db: DEFAULT_SILENCE_THRESHOLD_DB,
            min_silence_duration_secs: DEFAULT_SILENCE_DURATION_SECS,
            padding_secs: DEFAULT_PADDING_SECS,
            min_segment_length_secs: DEFAULT_MIN_SEGMENT_LENGTH_SECS,
            use_subfolder: true,
        }
    }
}
