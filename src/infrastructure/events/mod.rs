//! Events - 批处理事件推送

mod publisher;

pub use publisher::EventPublisher;
