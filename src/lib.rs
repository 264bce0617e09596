//! AuraSplit - 批量静音分割编排
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Audio Context: 音频文件描述、分割参数、单次分割结果
//! - Batch Context: 顺序批处理状态机
//! - status: 状态文本格式化
//!
//! 应用层 (application/):
//! - Ports: ScanService, SplitService, BatchEventPublisher
//! - Commands: 扫描、单文件分割、顺序批处理（fail-fast）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 远端扫描 / 分割服务的 HTTP 客户端
//! - Events: 批处理事件广播

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
