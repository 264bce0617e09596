//! 命令行定义 (clap builder)

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use aurasplit::domain::SplitConfig;

pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about("Silence-based audio splitting against a remote segmentation service")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Configuration file (defaults to ./aurasplit.toml if present)")
                .global(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .help("Base URL of the scan / split service")
                .global(true),
        )
        .subcommand(
            Command::new("scan")
                .about("List the audio files the service finds in a folder")
                .arg(folder_arg()),
        )
        .subcommand(
            Command::new("split")
                .about("Split a single audio file")
                .arg(
                    Arg::new("file_path")
                        .value_name("FILE")
                        .help("Absolute path of the audio file, as seen by the service")
                        .required(true),
                )
                .args(split_args()),
        )
        .subcommand(
            Command::new("split-all")
                .about("Scan a folder and split every file in order, stopping at the first failure")
                .arg(folder_arg())
                .args(split_args())
                .arg(
                    Arg::new("json-events")
                        .long("json-events")
                        .help("Print batch events as JSON lines instead of status text")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn folder_arg() -> Arg {
    Arg::new("folder_path")
        .value_name("FOLDER")
        .help("Absolute folder path, as seen by the service")
        .required(true)
}

fn split_args() -> Vec<Arg> {
    vec![
        Arg::new("threshold")
            .short('t')
            .long("threshold")
            .value_name("DB")
            .help("Silence threshold in dB")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64)),
        Arg::new("duration")
            .short('d')
            .long("duration")
            .value_name("SECONDS")
            .help("Minimum silence duration")
            .value_parser(value_parser!(f64)),
        Arg::new("padding")
            .short('p')
            .long("padding")
            .value_name("SECONDS")
            .help("Padding kept around each segment")
            .value_parser(value_parser!(f64)),
        Arg::new("min-length")
            .short('m')
            .long("min-length")
            .value_name("SECONDS")
            .help("Minimum segment length; shorter segments are merged")
            .value_parser(value_parser!(f64)),
        Arg::new("no-subfolder")
            .long("no-subfolder")
            .help("Write segments next to the source file instead of a subfolder")
            .action(ArgAction::SetTrue),
    ]
}

/// 用命令行参数覆盖配置中的默认分割参数
pub fn split_config_from(matches: &ArgMatches, defaults: &SplitConfig) -> SplitConfig {
    let mut config = defaults.clone();
    if let Some(value) = matches.get_one::<f64>("threshold") {
        config.silence_threshold_db = *value;
    }
    if let Some(value) = matches.get_one::<f64>("duration") {
        config.min_silence_duration_secs = *value;
    }
    if let Some(value) = matches.get_one::<f64>("padding") {
        config.padding_secs = *value;
    }
    if let Some(value) = matches.get_one::<f64>("min-length") {
        config.min_segment_length_secs = *value;
    }
    if matches.get_flag("no-subfolder") {
        config.use_subfolder = false;
    }
    config
}
