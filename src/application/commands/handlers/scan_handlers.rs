//! Scan Command Handlers

use std::sync::Arc;

use crate::application::commands::scan_commands::*;
use crate::application::ports::{ScanError, ScanServicePort};
use crate::domain::status::{found_files_message, SCANNING_MESSAGE};

/// ScanFolder Handler - 扫描文件夹
pub struct ScanFolderHandler {
    scan_service: Arc<dyn ScanServicePort>,
}

impl ScanFolderHandler {
    pub fn new(scan_service: Arc<dyn ScanServicePort>) -> Self {
        Self { scan_service }
    }

    /// 执行扫描
    ///
    /// 空路径（含纯空白）不发起请求，返回 `Ok(None)`；
    /// 失败时不返回部分结果，调用方原有的文件列表保持不变
    pub async fn handle(
        &self,
        cmd: ScanFolderCommand,
    ) -> Result<Option<ScanFolderResponse>, ScanError> {
        if cmd.folder_path.trim().is_empty() {
            tracing::debug!("Empty folder path, scan skipped");
            return Ok(None);
        }

        tracing::info!(folder_path = %cmd.folder_path, "{}", SCANNING_MESSAGE);

        let files = match self.scan_service.scan(&cmd.folder_path).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(
                    folder_path = %cmd.folder_path,
                    error = %e,
                    transport = e.is_transport(),
                    "Scan failed"
                );
                return Err(e);
            }
        };

        tracing::info!(
            folder_path = %cmd.folder_path,
            count = files.len(),
            "Scan completed"
        );

        Ok(Some(ScanFolderResponse {
            status_message: found_files_message(files.len()),
            files,
        }))
    }
}
