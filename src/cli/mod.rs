//! # Command-line options
//!
//! Every option is optional. Running the binary bare probes the Workers
//! deployment with both runs and prints plain text.

use clap::{Parser, ValueEnum};

use crate::probe::plan::DEFAULT_BASE_URL;

/// Probe the HK Post worker endpoints and print what each request got back.
#[derive(Debug, Clone, Parser)]
#[command(name = "hkpost-probe", version)]
pub struct CliConfig {
    /// Base URL of the worker, without the `/hk-post/...` path.
    #[arg(long, env = "PROBE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Language sent with building searches.
    #[arg(long, value_enum, default_value_t = Lang::EnUs)]
    pub lang: Lang,

    /// Which runs to perform.
    #[arg(long, value_enum, default_value_t = Phase::All)]
    pub phase: Phase,

    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,
}

/// Output format for the console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

/// The two languages the building search accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[value(name = "en_US")]
    EnUs,
    #[value(name = "zh_TW")]
    ZhTw,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::EnUs => "en_US",
            Lang::ZhTw => "zh_TW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Phase {
    All,
    IpMonitor,
    SearchBuildings,
}
