use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use foodscan_core::domain::common::{
    AnalysisBackend, AnalysisConfig, DEFAULT_ANALYSIS_API_URL, FoodScanConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "foodscan", version, about = "Food photo analysis, nutrition and recipes")]
pub struct Args {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP analysis endpoint.
    Serve(ServerArgs),
    /// Analyze one image file and print the results.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Remote,
    Stub,
}

impl From<BackendArg> for AnalysisBackend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Remote => AnalysisBackend::Remote,
            BackendArg::Stub => AnalysisBackend::Stub,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AnalysisArgs {
    #[arg(
        long = "analysis-backend",
        env = "ANALYSIS_BACKEND",
        value_enum,
        default_value = "stub",
        global = true
    )]
    pub backend: BackendArg,

    #[arg(
        long = "analysis-api-url",
        env = "ANALYSIS_API_URL",
        default_value = DEFAULT_ANALYSIS_API_URL,
        global = true
    )]
    pub api_url: Url,

    #[arg(long = "analysis-timeout-secs", env = "ANALYSIS_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(
        long = "stub-delay-ms",
        env = "STUB_DELAY_MS",
        default_value_t = 2000,
        global = true
    )]
    pub stub_delay_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info", global = true)]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, global = true)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            root_path: "/api".to_string(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AnalyzeArgs {
    /// Image file to analyze.
    pub path: std::path::PathBuf,

    /// Declared media type; guessed from the file extension when omitted.
    #[arg(long = "media-type")]
    pub media_type: Option<String>,

    /// Print the results view as JSON instead of text.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

impl From<AnalysisArgs> for AnalysisConfig {
    fn from(args: AnalysisArgs) -> Self {
        Self {
            backend: args.backend.into(),
            api_url: args.api_url.to_string(),
            timeout: args.timeout_secs.map(Duration::from_secs),
            stub_delay: Duration::from_millis(args.stub_delay_ms),
        }
    }
}

impl From<Args> for FoodScanConfig {
    fn from(args: Args) -> Self {
        Self {
            analysis: args.analysis.into(),
        }
    }
}
