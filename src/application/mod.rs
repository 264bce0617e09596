//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ScanService、SplitService、BatchEventPublisher）
//! - commands: 扫描、单文件分割、顺序批处理命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{BatchOrchestrator, ScanFolderHandler, SplitAllHandler, SplitFileHandler},
    ScanFolderCommand, ScanFolderResponse, SplitAllCommand, SplitFileCommand, SplitFileResponse,
};

pub use error::ApplicationError;

pub use ports::{BatchEvent, BatchEventPublisherPort, ScanError, ScanServicePort, SplitServicePort};
