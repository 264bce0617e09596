//! AuraSplit - 批量静音分割命令行
//!
//! 扫描文件夹、分割单个文件，或按顺序分割全部文件（遇到第一个失败即停止）

mod cli;

use std::sync::Arc;

use anyhow::{anyhow, bail};
use clap::ArgMatches;
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;

use aurasplit::application::{
    BatchEvent, ScanFolderCommand, ScanFolderHandler, SplitAllCommand, SplitAllHandler,
    SplitFileCommand, SplitFileHandler,
};
use aurasplit::config::{load_config_from_path, print_config, AppConfig, LogConfig};
use aurasplit::domain::status::{describe_batch, format_size, splitting_message};
use aurasplit::domain::BatchPhase;
use aurasplit::infrastructure::{EventPublisher, HttpScanClient, HttpSplitClient};

use crate::cli::{build_cli, split_config_from};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let Some((command, sub)) = matches.subcommand() else {
        bail!("no subcommand given");
    };

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let config_path = sub.get_one::<std::path::PathBuf>("config");
    let mut config = load_config_from_path(config_path.map(|p| p.as_path()))
        .map_err(|e| anyhow!("Failed to load config: {}", e))?;
    if let Some(url) = sub.get_one::<String>("url") {
        config.service.url = url.clone();
    }

    init_tracing(&config.log);
    print_config(&config);

    match command {
        "scan" => run_scan(&config, sub).await,
        "split" => run_split(&config, sub).await,
        "split-all" => run_split_all(&config, sub).await,
        other => bail!("unknown subcommand: {}", other),
    }
}

/// 初始化日志，输出到 stderr，stdout 只留给状态行
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},aurasplit={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run_scan(config: &AppConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let folder_path = required(matches, "folder_path")?;
    let scan_client = Arc::new(HttpScanClient::new(config.service.http_config())?);
    let handler = ScanFolderHandler::new(scan_client);

    match handler.handle(ScanFolderCommand::new(folder_path)).await {
        Ok(Some(response)) => {
            for file in &response.files {
                println!("{}\t{}\t{}", file.name, format_size(file.size), file.path);
            }
            println!("{}", response.status_message);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            println!("{}", e.status_message());
            Err(e.into())
        }
    }
}

async fn run_split(config: &AppConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let file_path = required(matches, "file_path")?;
    let split_client = Arc::new(HttpSplitClient::new(config.service.http_config())?);
    let handler = SplitFileHandler::new(split_client);

    println!("{}", splitting_message(&file_path));
    let response = handler
        .handle(SplitFileCommand {
            file_path,
            config: split_config_from(matches, &config.split),
        })
        .await;
    println!("{}", response.status_message);

    if response.outcome.is_success() {
        Ok(())
    } else {
        bail!("{}", response.status_message)
    }
}

async fn run_split_all(config: &AppConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let folder_path = required(matches, "folder_path")?;
    let json_events = matches.get_flag("json-events");

    // 扫描与分割共享同一个连接池
    let http_config = config.service.http_config();
    let http_client = http_config.build_client()?;
    let scan_client = Arc::new(HttpScanClient::with_client(http_client.clone(), http_config.clone()));
    let split_client = Arc::new(HttpSplitClient::with_client(http_client, http_config));

    let scan_handler = ScanFolderHandler::new(scan_client);
    let files = match scan_handler.handle(ScanFolderCommand::new(folder_path)).await {
        Ok(Some(response)) => {
            println!("{}", response.status_message);
            response.files
        }
        Ok(None) => return Ok(()),
        Err(e) => {
            println!("{}", e.status_message());
            return Err(e.into());
        }
    };

    if files.is_empty() {
        return Ok(());
    }

    let event_publisher = EventPublisher::new().arc();
    let split_all_handler = SplitAllHandler::new(split_client, event_publisher.clone());
    let orchestrator = split_all_handler.prepare(SplitAllCommand {
        files,
        config: split_config_from(matches, &config.split),
    })?;

    // Ctrl-C 只停止后续派发，在途文件会等待结果
    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received interrupt, stopping after the current file");
            signal_token.cancel();
        }
    });

    let mut events = event_publisher.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    print_event(&event, json_events);
                    if event.is_terminal() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped = skipped, "Event printer lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let state = orchestrator.with_cancellation(cancel_token).run().await?;
    if let Err(e) = printer.await {
        tracing::warn!(error = %e, "Event printer task failed");
    }

    tracing::info!(summary = %describe_batch(&state), "Batch finished");

    match state.phase() {
        BatchPhase::Completed => Ok(()),
        _ => bail!("{}", state.last_status_message()),
    }
}

fn print_event(event: &BatchEvent, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize event"),
        }
        return;
    }

    match event {
        BatchEvent::BatchStarted { .. } => {}
        BatchEvent::FileStarted { message, .. } => println!("{}", message),
        BatchEvent::FileSplit { name, splits, .. } => println!("  {}: {} parts", name, splits),
        BatchEvent::BatchCompleted { message, .. }
        | BatchEvent::BatchAborted { message, .. }
        | BatchEvent::BatchCancelled { message, .. } => println!("{}", message),
    }
}

fn required(matches: &ArgMatches, id: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| anyhow!("missing argument: {}", id))
}
