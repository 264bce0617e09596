//! Split Service Port - 远端静音分割引擎抽象

use async_trait::async_trait;

use crate::domain::audio::{SplitConfig, SplitOutcome};

/// Split Service Port
///
/// 一次调用对应一次出站请求。该操作不幂等，重复调用可能在远端产生额外文件，
/// 调用方不得自动重试。
#[async_trait]
pub trait SplitServicePort: Send + Sync {
    /// 分割单个文件
    ///
    /// 预期内的失败（参数非法、文件损坏、服务不可达）都以 `SplitOutcome::Failure` 返回
    async fn split(&self, file_path: &str, config: &SplitConfig) -> SplitOutcome;
}
