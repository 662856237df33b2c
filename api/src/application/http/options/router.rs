use super::handlers::get_options::{__path_get_options, get_options};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_options))]
pub struct OptionsApiDoc;

pub fn options_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/options/{{kind}}", state.args.server.root_path),
        get(get_options),
    )
}
