use acorn_core::domain::{
    listing::services::list_entities, property::value_objects::PropertyFilters,
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
    path = "/api/properties",
    tag = "property",
    summary = "List properties",
    description = "List properties with filtering, sorting, and pagination",
    params(
        ("q" = Option<String>, Query, description = "Free-text search"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("pageSize" = Option<u32>, Query, description = "Rows per page"),
        ("sort" = Option<String>, Query, description = "Comma-separated key:dir rules, e.g. name:asc"),
        ("statusIds" = Option<String>, Query, description = "Comma-separated status ids"),
        ("minCleaningMins" = Option<i64>, Query, description = "Minimum estimated cleaning minutes"),
        ("maxCleaningMins" = Option<i64>, Query, description = "Maximum estimated cleaning minutes")
    ),
    responses(
        (status = 200, body = ListResponse),
        (status = 400, body = ErrorBody),
        (status = 502, body = ErrorBody)
    )
)]
pub async fn list_properties(
    State(state): State<AppState>,
    ListQuery(request): ListQuery<PropertyFilters>,
) -> Result<Response<ListResponse>, ApiError> {
    let page = list_entities(&*state.repository, request).await?;
    Ok(Response::OK(page.into()))
}
