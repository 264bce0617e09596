//! Audio Context - 音频文件与分割参数
//!
//! 职责:
//! - 扫描结果的文件描述
//! - 每次请求的分割参数
//! - 单次分割结果

mod outcome;
mod value_objects;

pub use outcome::SplitOutcome;
pub use value_objects::{
    AudioFileDescriptor, SplitConfig, DEFAULT_MIN_SEGMENT_LENGTH_SECS, DEFAULT_PADDING_SECS,
    DEFAULT_SILENCE_DURATION_SECS, DEFAULT_SILENCE_THRESHOLD_DB,
};
