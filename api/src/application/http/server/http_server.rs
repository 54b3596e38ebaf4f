use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use foodscan_core::{
    application::create_analysis_service, domain::common::FoodScanConfig,
    infrastructure::notification::TracingNotifier,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span};

use crate::application::http::{
    analysis::router::analysis_routes,
    health::health_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::ServerArgs;

pub fn state(args: Arc<ServerArgs>, config: &FoodScanConfig) -> Result<AppState, anyhow::Error> {
    let analysis_service = create_analysis_service(&config.analysis, TracingNotifier)?;
    Ok(AppState::new(args, analysis_service))
}

fn allowed_origins(origins: &[String]) -> Result<AllowOrigin, anyhow::Error> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(AllowOrigin::any());
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid origin {origin:?}"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", origins);
    Ok(AllowOrigin::list(origins))
}

/// Builds the application router with tracing, CORS and the OpenAPI document.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins(&state.args.allowed_origins)?)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let root_path = state.args.root_path.clone();
    let openapi = ApiDoc::with_root_path(&root_path);

    let router = Router::new()
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(analysis_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}
