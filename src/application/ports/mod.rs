//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod batch_events;
mod scan_service;
mod split_service;

pub use batch_events::{BatchEvent, BatchEventPublisherPort};
pub use scan_service::{ScanError, ScanServicePort};
pub use split_service::SplitServicePort;
