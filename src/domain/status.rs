//! 状态文本格式化
//!
//! 纯函数：字节数转人类可读单位、构造状态行

use crate::domain::batch::BatchState;

pub const SCANNING_MESSAGE: &str = "Scanning folder...";
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to backend.";
pub const SPLIT_FAILED_MESSAGE: &str = "Splitting failed.";

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// 以 1024 为底格式化字节数
///
/// 最多两位小数并去掉末尾的 0，`0` 输出 `"0 Bytes"`，超过 GB 仍以 GB 表示
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// 取路径最后一段，同时接受 `/` 和 `\` 分隔符
pub fn file_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

pub fn found_files_message(count: usize) -> String {
    format!("Found {} audio files.", count)
}

pub fn error_message(detail: &str) -> String {
    format!("Error: {}", detail)
}

pub fn splitting_message(file_path: &str) -> String {
    format!("Splitting {}...", file_name(file_path))
}

pub fn split_success_message(split_count: u32) -> String {
    format!("Successfully split into {} parts.", split_count)
}

pub fn processing_message(index: usize, total: usize, name: &str) -> String {
    format!("Processing file {} of {}: {}", index + 1, total, name)
}

pub fn stopped_message(name: &str, detail: &str) -> String {
    format!("Stopped at {}: {}", name, detail)
}

pub fn completed_message(total: usize) -> String {
    format!("Successfully split all {} files.", total)
}

pub fn cancelled_message(processed: usize, total: usize) -> String {
    format!("Cancelled after {} of {} files.", processed, total)
}

/// 批处理进度行，如 `[1/3] Processing file 2 of 3: b.mp3`
pub fn describe_batch(state: &BatchState) -> String {
    format!(
        "[{}/{}] {}",
        state.processed_files(),
        state.total_files(),
        state.last_status_message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioFileDescriptor;

    #[test]
    fn test_format_size_boundaries() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1000), "1000 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_size_rounding() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1126), "1.1 KB");
        assert_eq!(format_size(5_347_737), "5.1 MB");
        // 1048575 / 1024 = 1023.999..，两位小数进位
        assert_eq!(format_size(1_048_575), "1024 KB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(1_099_511_627_776), "1024 GB");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("C:\\Music\\Albums\\track.mp3"), "track.mp3");
        assert_eq!(file_name("/home/me/track.flac"), "track.flac");
        assert_eq!(file_name("track.ogg"), "track.ogg");
    }

    #[test]
    fn test_messages() {
        assert_eq!(found_files_message(3), "Found 3 audio files.");
        assert_eq!(error_message("Invalid folder path"), "Error: Invalid folder path");
        assert_eq!(splitting_message("C:\\in\\a.wav"), "Splitting a.wav...");
        assert_eq!(split_success_message(7), "Successfully split into 7 parts.");
        assert_eq!(processing_message(0, 3, "a.mp3"), "Processing file 1 of 3: a.mp3");
        assert_eq!(stopped_message("b.mp3", "boom"), "Stopped at b.mp3: boom");
        assert_eq!(completed_message(2), "Successfully split all 2 files.");
    }

    #[test]
    fn test_describe_batch() {
        let files = vec![
            AudioFileDescriptor::new("a.mp3", "/m/a.mp3", 1),
            AudioFileDescriptor::new("b.mp3", "/m/b.mp3", 1),
        ];
        let mut state = BatchState::new(files).unwrap();
        state.start().unwrap();
        state.begin_file(0).unwrap();
        state.record_success(2).unwrap();
        state.begin_file(1).unwrap();

        assert_eq!(describe_batch(&state), "[1/2] Processing file 2 of 2: b.mp3");
    }
}
