//! Split Command Handlers - 单文件分割

use std::sync::Arc;

use crate::application::commands::split_commands::*;
use crate::application::ports::SplitServicePort;
use crate::domain::audio::SplitOutcome;
use crate::domain::status::{error_message, split_success_message, SPLIT_FAILED_MESSAGE};

/// SplitFile Handler - 单文件分割
///
/// 直接调用分割服务，不创建也不修改任何批处理状态
pub struct SplitFileHandler {
    split_service: Arc<dyn SplitServicePort>,
}

impl SplitFileHandler {
    pub fn new(split_service: Arc<dyn SplitServicePort>) -> Self {
        Self { split_service }
    }

    pub async fn handle(&self, cmd: SplitFileCommand) -> SplitFileResponse {
        tracing::info!(file_path = %cmd.file_path, "Splitting single file");

        let outcome = self.split_service.split(&cmd.file_path, &cmd.config).await;

        let status_message = match &outcome {
            SplitOutcome::Success { split_count, .. } => {
                tracing::info!(
                    file_path = %cmd.file_path,
                    splits = split_count,
                    "Single split completed"
                );
                split_success_message(*split_count)
            }
            SplitOutcome::Failure { detail, transport } => {
                tracing::warn!(
                    file_path = %cmd.file_path,
                    error = %detail,
                    transport = *transport,
                    "Single split failed"
                );
                if *transport {
                    SPLIT_FAILED_MESSAGE.to_string()
                } else {
                    error_message(detail)
                }
            }
        };

        SplitFileResponse {
            outcome,
            status_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::test_support::{
        MockSplitService, RecordingPublisher,
    };
    use crate::application::commands::handlers::BatchOrchestrator;
    use crate::domain::audio::{AudioFileDescriptor, SplitConfig};
    use crate::domain::batch::BatchPhase;

    fn command(path: &str) -> SplitFileCommand {
        SplitFileCommand {
            file_path: path.to_string(),
            config: SplitConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_success_reports_count() {
        let service = Arc::new(MockSplitService::new().with_outcome("/m/a.mp3", SplitOutcome::success(4)));
        let handler = SplitFileHandler::new(service.clone());

        let response = handler.handle(command("/m/a.mp3")).await;
        assert_eq!(response.outcome.split_count(), Some(4));
        assert_eq!(response.status_message, "Successfully split into 4 parts.");
        assert_eq!(service.calls(), vec!["/m/a.mp3".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_reports_detail() {
        let service = Arc::new(
            MockSplitService::new().with_outcome("/m/a.mp3", SplitOutcome::failure("File not found")),
        );
        let handler = SplitFileHandler::new(service);

        let response = handler.handle(command("/m/a.mp3")).await;
        assert!(!response.outcome.is_success());
        assert_eq!(response.status_message, "Error: File not found");
    }

    #[tokio::test]
    async fn test_transport_failure_reports_generic_message() {
        let service = Arc::new(MockSplitService::new().with_outcome(
            "/m/a.mp3",
            SplitOutcome::transport_failure("connection error: refused"),
        ));
        let handler = SplitFileHandler::new(service);

        let response = handler.handle(command("/m/a.mp3")).await;
        assert!(response.outcome.is_transport_failure());
        assert_eq!(response.outcome.detail(), Some("connection error: refused"));
        assert_eq!(response.status_message, "Splitting failed.");
    }

    #[tokio::test]
    async fn test_single_split_leaves_batch_untouched() {
        let service = Arc::new(MockSplitService::new());
        let orchestrator = BatchOrchestrator::new(
            service.clone(),
            Arc::new(RecordingPublisher::default()),
            SplitAllCommand {
                files: vec![AudioFileDescriptor::new("a.mp3", "/m/a.mp3", 10)],
                config: SplitConfig::default(),
            },
        )
        .unwrap();
        let snapshot = orchestrator.subscribe();

        let handler = SplitFileHandler::new(service.clone());
        handler.handle(command("/m/a.mp3")).await;

        assert!(!snapshot.has_changed().unwrap());
        let state = snapshot.borrow();
        assert_eq!(state.phase(), BatchPhase::Idle);
        assert_eq!(state.processed_files(), 0);
        assert_eq!(service.calls().len(), 1);
    }
}
