use std::time::Duration;

pub mod entities;

/// Default simulated processing time of the stub analysis service.
pub const DEFAULT_STUB_DELAY: Duration = Duration::from_millis(2000);

pub const DEFAULT_ANALYSIS_API_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug)]
pub struct FoodScanConfig {
    pub analysis: AnalysisConfig,
}

/// Which analysis implementation is wired in, decided once at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisBackend {
    Remote,
    Stub,
}

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub backend: AnalysisBackend,
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub stub_delay: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            backend: AnalysisBackend::Stub,
            api_url: DEFAULT_ANALYSIS_API_URL.to_string(),
            timeout: None,
            stub_delay: DEFAULT_STUB_DELAY,
        }
    }
}
