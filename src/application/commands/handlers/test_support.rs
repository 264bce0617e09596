//! 命令处理器测试用的端口替身

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    BatchEvent, BatchEventPublisherPort, ScanError, ScanServicePort, SplitServicePort,
};
use crate::domain::audio::{AudioFileDescriptor, SplitConfig, SplitOutcome};

pub struct MockScanService {
    result: Mutex<Option<Result<Vec<AudioFileDescriptor>, ScanError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockScanService {
    pub fn returning(result: Result<Vec<AudioFileDescriptor>, ScanError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScanServicePort for MockScanService {
    async fn scan(&self, folder_path: &str) -> Result<Vec<AudioFileDescriptor>, ScanError> {
        self.calls.lock().unwrap().push(folder_path.to_string());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ScanError::NetworkError("no scripted result".to_string())))
    }
}

/// 可编排结果、延迟与取消的分割服务替身，记录调用顺序与区间
#[derive(Default)]
pub struct MockSplitService {
    outcomes: HashMap<String, SplitOutcome>,
    delays: HashMap<String, Duration>,
    cancel_on: Option<(String, CancellationToken)>,
    calls: Mutex<Vec<String>>,
    intervals: Mutex<Vec<(Instant, Instant)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockSplitService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, path: &str, outcome: SplitOutcome) -> Self {
        self.outcomes.insert(path.to_string(), outcome);
        self
    }

    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    /// 处理该路径时触发取消
    pub fn cancel_on(mut self, path: &str, token: CancellationToken) -> Self {
        self.cancel_on = Some((path.to_string(), token));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn intervals(&self) -> Vec<(Instant, Instant)> {
        self.intervals.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SplitServicePort for MockSplitService {
    async fn split(&self, file_path: &str, _config: &SplitConfig) -> SplitOutcome {
        let started = Instant::now();
        let now_in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now_in_flight, Ordering::SeqCst);
        self.calls.lock().unwrap().push(file_path.to_string());

        if let Some((path, token)) = &self.cancel_on {
            if path == file_path {
                token.cancel();
            }
        }

        let delay = self.delays.get(file_path).copied().unwrap_or(Duration::from_millis(1));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.intervals.lock().unwrap().push((started, Instant::now()));

        self.outcomes
            .get(file_path)
            .cloned()
            .unwrap_or_else(|| SplitOutcome::success(1))
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<BatchEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<BatchEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BatchEventPublisherPort for RecordingPublisher {
    fn publish(&self, event: BatchEvent) {
        self.events.lock().unwrap().push(event);
    }
}
