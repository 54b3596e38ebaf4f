use utoipa::OpenApi;

use crate::application::http::{analysis::router::AnalysisApiDoc, health::HealthApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodScan API",
        description = "Food photo analysis with nutrition facts and recipe suggestions"
    ),
    tags(
        (name = "analysis", description = "Food image analysis"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The complete document, every path prefixed with `root_path`.
    pub fn with_root_path(root_path: &str) -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(AnalysisApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());

        let mut paths = openapi.paths.clone();
        paths.paths = openapi
            .paths
            .paths
            .into_iter()
            .map(|(path, item)| (format!("{}{path}", root_path), item))
            .collect();
        openapi.paths = paths;

        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_carry_root_prefix() {
        let openapi = ApiDoc::with_root_path("/api");
        let paths: Vec<_> = openapi.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/api/analyze".to_string()));
        assert!(paths.contains(&"/api/health".to_string()));
    }
}
