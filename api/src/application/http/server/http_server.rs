use std::sync::Arc;

use crate::application::http::appointment::router::appointment_routes;
use crate::application::http::health::health_routes;
use crate::application::http::options::router::options_routes;
use crate::application::http::property::router::property_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::application::http::staff::router::staff_routes;
use crate::args::Args;

use acorn_core::{domain::common::AcornConfig, infrastructure::postgrest::PostgrestRepository};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = AcornConfig::from(args.as_ref().clone());
    let repository = PostgrestRepository::new(&config.backend)?;

    Ok(AppState::new(args, repository))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(move || async move { Json(openapi) }),
        )
        .merge(appointment_routes(state.clone()))
        .merge(property_routes(state.clone()))
        .merge(staff_routes(state.clone()))
        .merge(options_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
