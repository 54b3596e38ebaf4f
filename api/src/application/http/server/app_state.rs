use std::sync::Arc;

use foodscan_core::{
    application::FoodScanAnalyzer, infrastructure::notification::TracingNotifier,
};

use crate::args::ServerArgs;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<ServerArgs>,
    pub analysis_service: Arc<FoodScanAnalyzer<TracingNotifier>>,
}

impl AppState {
    pub fn new(args: Arc<ServerArgs>, analysis_service: FoodScanAnalyzer<TracingNotifier>) -> Self {
        Self {
            args,
            analysis_service: Arc::new(analysis_service),
        }
    }
}
