use acorn_core::domain::{
    listing::services::list_entities, staff::value_objects::StaffFilters,
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
    path = "/api/staff",
    tag = "staff",
    summary = "List staff",
    description = "List staff with filtering, sorting, and pagination",
    params(
        ("q" = Option<String>, Query, description = "Free-text search"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("pageSize" = Option<u32>, Query, description = "Rows per page"),
        ("sort" = Option<String>, Query, description = "Comma-separated key:dir rules, e.g. last_name:asc"),
        ("statusIds" = Option<String>, Query, description = "Comma-separated status ids"),
        ("roleIds" = Option<String>, Query, description = "Comma-separated role ids"),
        ("canClean" = Option<bool>, Query, description = "Only staff allowed to clean")
    ),
    responses(
        (status = 200, body = ListResponse),
        (status = 400, body = ErrorBody),
        (status = 502, body = ErrorBody)
    )
)]
pub async fn list_staff(
    State(state): State<AppState>,
    ListQuery(request): ListQuery<StaffFilters>,
) -> Result<Response<ListResponse>, ApiError> {
    let page = list_entities(&*state.repository, request).await?;
    Ok(Response::OK(page.into()))
}
