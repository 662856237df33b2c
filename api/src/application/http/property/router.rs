use super::handlers::list_properties::{__path_list_properties, list_properties};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_properties))]
pub struct PropertyApiDoc;

pub fn property_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/properties", state.args.server.root_path),
        get(list_properties),
    )
}
