use acorn_core::domain::listing::{services::list_options, value_objects::OptionKind};
use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorBody},
        response::{OptionsResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/options/{kind}",
    tag = "options",
    summary = "Get options",
    description = "List `{id, label}` pairs of a lookup table for selection controls",
    params(
        ("kind" = String, Path, description = "One of services, appointment-statuses, property-statuses, staff-statuses, roles, properties, staff"),
    ),
    responses(
        (status = 200, body = OptionsResponse),
        (status = 404, body = ErrorBody),
        (status = 502, body = ErrorBody)
    )
)]
pub async fn get_options(
    Path(kind): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<OptionsResponse>, ApiError> {
    let option_kind = kind.parse::<OptionKind>().map_err(|_| {
        tracing::debug!("Unknown option kind: {}", kind);
        ApiError::NotFound(format!("Unknown option kind '{}'", kind))
    })?;

    let options = list_options(&*state.repository, option_kind).await?;

    Ok(Response::OK(OptionsResponse { options }))
}
