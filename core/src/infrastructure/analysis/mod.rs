pub mod datasets;
pub mod remote;
pub mod stub;

pub use remote::RemoteAnalysisService;
pub use stub::StubAnalysisService;
