//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（aurasplit.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::audio::{
    DEFAULT_MIN_SEGMENT_LENGTH_SECS, DEFAULT_PADDING_SECS, DEFAULT_SILENCE_DURATION_SECS,
    DEFAULT_SILENCE_THRESHOLD_DB,
};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["aurasplit", "aurasplit.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "AURASPLIT";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `AURASPLIT_`，层级分隔符 `__`）
/// 2. 配置文件（aurasplit.toml 或 aurasplit.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `AURASPLIT_SERVICE__URL=http://127.0.0.1:9000`
/// - `AURASPLIT_SERVICE__TIMEOUT_SECS=900`
/// - `AURASPLIT_SPLIT__SILENCE_THRESHOLD=-40`
/// - `AURASPLIT_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，给出时文件必须存在；为 None 时使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("service.url", "http://localhost:8000")?
        .set_default("service.timeout_secs", 600)?
        .set_default("service.connect_timeout_secs", 5)?
        .set_default("split.silence_threshold", DEFAULT_SILENCE_THRESHOLD_DB)?
        .set_default("split.silence_duration", DEFAULT_SILENCE_DURATION_SECS)?
        .set_default("split.padding", DEFAULT_PADDING_SECS)?
        .set_default("split.min_segment_length", DEFAULT_MIN_SEGMENT_LENGTH_SECS)?
        .set_default("split.use_subfolder", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: AURASPLIT_SERVICE__URL=http://127.0.0.1:9000
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 分割参数不在本地校验，由远端服务判断
pub(crate) fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.service.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Service URL cannot be empty".to_string(),
        ));
    }

    if !(config.service.url.starts_with("http://") || config.service.url.starts_with("https://"))
    {
        return Err(ConfigError::ValidationError(format!(
            "Service URL must start with http:// or https://: {}",
            config.service.url
        )));
    }

    if config.service.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Service timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== AuraSplit Configuration ===");
    tracing::info!("Service URL: {}", config.service.url);
    tracing::info!("Service Timeout: {}s", config.service.timeout_secs);
    tracing::info!("Connect Timeout: {}s", config.service.connect_timeout_secs);
    tracing::info!("Silence Threshold: {} dB", config.split.silence_threshold_db);
    tracing::info!("Silence Duration: {}s", config.split.min_silence_duration_secs);
    tracing::info!("Padding: {}s", config.split.padding_secs);
    tracing::info!("Min Segment Length: {}s", config.split.min_segment_length_secs);
    tracing::info!("Use Subfolder: {}", config.split.use_subfolder);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("===============================");
}
