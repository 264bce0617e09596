//! SplitAll Handler - 顺序批处理编排
//!
//! 按列表顺序逐个调用分割服务，同一时刻最多一个在途请求；
//! 第一个失败即停止，剩余文件不再提交。

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::application::commands::split_commands::SplitAllCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{BatchEvent, BatchEventPublisherPort, SplitServicePort};
use crate::domain::audio::{SplitConfig, SplitOutcome};
use crate::domain::batch::BatchState;

/// 批处理编排器
///
/// 一次性使用：`run` 消费自身，结束后状态随返回值交给调用方。
/// 进度可通过 `subscribe` 轮询快照，或通过事件端口接收。
pub struct BatchOrchestrator {
    split_service: Arc<dyn SplitServicePort>,
    event_publisher: Arc<dyn BatchEventPublisherPort>,
    config: SplitConfig,
    state: BatchState,
    snapshot_tx: watch::Sender<BatchState>,
    cancel_token: CancellationToken,
}

impl BatchOrchestrator {
    /// 以文件快照创建编排器，空列表返回验证错误
    pub fn new(
        split_service: Arc<dyn SplitServicePort>,
        event_publisher: Arc<dyn BatchEventPublisherPort>,
        cmd: SplitAllCommand,
    ) -> Result<Self, ApplicationError> {
        let state = BatchState::new(cmd.files)?;
        let (snapshot_tx, _) = watch::channel(state.clone());

        Ok(Self {
            split_service,
            event_publisher,
            config: cmd.config,
            state,
            snapshot_tx,
            cancel_token: CancellationToken::new(),
        })
    }

    /// 绑定取消令牌
    ///
    /// 令牌只在两次请求之间检查，在途请求会等到结果返回并记录
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn batch_id(&self) -> Uuid {
        self.state.batch_id()
    }

    /// 订阅状态快照，每次状态转换都会更新
    pub fn subscribe(&self) -> watch::Receiver<BatchState> {
        self.snapshot_tx.subscribe()
    }

    /// 运行批处理直到完成、中止或取消
    pub async fn run(mut self) -> Result<BatchState, ApplicationError> {
        let batch_id = self.state.batch_id();
        let total_files = self.state.total_files();

        self.state.start()?;
        self.publish_snapshot();
        self.event_publisher.publish(BatchEvent::BatchStarted {
            batch_id,
            total_files,
        });
        tracing::info!(batch_id = %batch_id, total_files = total_files, "Batch started");

        for index in 0..total_files {
            if self.cancel_token.is_cancelled() {
                self.state.cancel()?;
                self.publish_snapshot();
                tracing::warn!(
                    batch_id = %batch_id,
                    processed_files = self.state.processed_files(),
                    total_files = total_files,
                    "Batch cancelled"
                );
                self.event_publisher.publish(BatchEvent::BatchCancelled {
                    batch_id,
                    processed_files: self.state.processed_files(),
                    total_files,
                    message: self.state.last_status_message().to_string(),
                });
                return Ok(self.state);
            }

            let file = self.state.begin_file(index)?;
            self.publish_snapshot();
            self.event_publisher.publish(BatchEvent::FileStarted {
                batch_id,
                index,
                name: file.name.clone(),
                message: self.state.last_status_message().to_string(),
            });
            tracing::debug!(
                batch_id = %batch_id,
                index = index,
                file_path = %file.path,
                "Dispatching split request"
            );

            match self.split_service.split(&file.path, &self.config).await {
                SplitOutcome::Success { split_count, .. } => {
                    self.state.record_success(split_count)?;
                    self.publish_snapshot();
                    tracing::info!(
                        batch_id = %batch_id,
                        index = index,
                        name = %file.name,
                        splits = split_count,
                        "File split"
                    );
                    self.event_publisher.publish(BatchEvent::FileSplit {
                        batch_id,
                        index,
                        name: file.name,
                        splits: split_count,
                        processed_files: self.state.processed_files(),
                    });
                }
                SplitOutcome::Failure { detail, .. } => {
                    tracing::error!(
                        batch_id = %batch_id,
                        index = index,
                        name = %file.name,
                        error = %detail,
                        "Split failed, stopping batch"
                    );
                    self.state.abort(detail.clone())?;
                    self.publish_snapshot();
                    self.event_publisher.publish(BatchEvent::BatchAborted {
                        batch_id,
                        index,
                        name: file.name,
                        reason: detail,
                        processed_files: self.state.processed_files(),
                        message: self.state.last_status_message().to_string(),
                    });
                    return Ok(self.state);
                }
            }
        }

        self.state.complete()?;
        self.publish_snapshot();
        tracing::info!(
            batch_id = %batch_id,
            total_files = total_files,
            total_splits = self.state.total_splits(),
            "Batch completed"
        );
        self.event_publisher.publish(BatchEvent::BatchCompleted {
            batch_id,
            total_files,
            total_splits: self.state.total_splits(),
            message: self.state.last_status_message().to_string(),
        });

        Ok(self.state)
    }

    fn publish_snapshot(&self) {
        self.snapshot_tx.send_replace(self.state.clone());
    }
}

/// SplitAll Handler - 创建并运行批处理
pub struct SplitAllHandler {
    split_service: Arc<dyn SplitServicePort>,
    event_publisher: Arc<dyn BatchEventPublisherPort>,
}

impl SplitAllHandler {
    pub fn new(
        split_service: Arc<dyn SplitServicePort>,
        event_publisher: Arc<dyn BatchEventPublisherPort>,
    ) -> Self {
        Self {
            split_service,
            event_publisher,
        }
    }

    /// 准备一个批次，调用方可在运行前订阅快照
    pub fn prepare(&self, cmd: SplitAllCommand) -> Result<BatchOrchestrator, ApplicationError> {
        BatchOrchestrator::new(self.split_service.clone(), self.event_publisher.clone(), cmd)
    }

    pub async fn handle(
        &self,
        cmd: SplitAllCommand,
        cancel_token: CancellationToken,
    ) -> Result<BatchState, ApplicationError> {
        self.prepare(cmd)?.with_cancellation(cancel_token).run().await
    }
}
