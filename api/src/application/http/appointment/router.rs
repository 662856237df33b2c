use super::handlers::list_appointments::{__path_list_appointments, list_appointments};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_appointments))]
pub struct AppointmentApiDoc;

pub fn appointment_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/appointments", state.args.server.root_path),
        get(list_appointments),
    )
}
