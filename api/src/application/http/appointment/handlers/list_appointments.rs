use acorn_core::domain::{
    appointment::value_objects::AppointmentFilters, listing::services::list_entities,
};
use axum::extract::State;

use crate::application::http::{
    query_extractor::ListQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody},
            response::{ListResponse, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "appointment",
    summary = "List appointments",
    description = "List appointments with filtering, sorting, and pagination",
    params(
        ("q" = Option<String>, Query, description = "Free-text search"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("pageSize" = Option<u32>, Query, description = "Rows per page"),
        ("sort" = Option<String>, Query, description = "Comma-separated key:dir rules, e.g. arrival_time:desc"),
        ("statusIds" = Option<String>, Query, description = "Comma-separated status ids"),
        ("serviceIds" = Option<String>, Query, description = "Comma-separated service ids"),
        ("staffIds" = Option<String>, Query, description = "Comma-separated staff ids"),
        ("propertyIds" = Option<String>, Query, description = "Comma-separated property ids"),
        ("dateFrom" = Option<String>, Query, description = "ISO-8601 lower bound on service time"),
        ("dateTo" = Option<String>, Query, description = "ISO-8601 upper bound on service time")
    ),
    responses(
        (status = 200, body = ListResponse),
        (status = 400, body = ErrorBody),
        (status = 502, body = ErrorBody)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    ListQuery(request): ListQuery<AppointmentFilters>,
) -> Result<Response<ListResponse>, ApiError> {
    let page = list_entities(&*state.repository, request).await?;
    Ok(Response::OK(page.into()))
}
