use super::handlers::list_staff::{__path_list_staff, list_staff};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_staff))]
pub struct StaffApiDoc;

pub fn staff_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/staff", state.args.server.root_path),
        get(list_staff),
    )
}
