use acorn_core::domain::query::list_request::{ListFilters, ListRequest};
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use super::server::api_entities::api_error::ApiError;

/// Extractor decoding paging, sorting and entity filters from the query string.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ListQuery(request): ListQuery<StaffFilters>,
/// ) -> Result<Response<ListResponse>, ApiError> {
///     // Use request.pagination, request.sort, request.filters
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQuery<F>(pub ListRequest<F>);

impl<S, F> FromRequestParts<S> for ListQuery<F>
where
    S: Send + Sync,
    F: ListFilters + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");

        let request = ListRequest::<F>::from_query(query_string).map_err(|e| {
            debug!("Rejected list query '{}': {}", query_string, e);
            ApiError::from(e)
        })?;

        Ok(ListQuery(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acorn_core::domain::staff::value_objects::StaffFilters;
    use axum::{Json, Router, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    async fn echo(ListQuery(request): ListQuery<StaffFilters>) -> Json<Value> {
        Json(json!({
            "page": request.pagination.page,
            "pageSize": request.pagination.page_size,
            "sort": request.sort,
            "filters": request.filters,
        }))
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/api/staff", get(echo))).unwrap()
    }

    #[tokio::test]
    async fn test_decodes_list_query() {
        let response = server()
            .get("/api/staff")
            .add_query_param("page", "2")
            .add_query_param("pageSize", "10")
            .add_query_param("sort", "LAST_NAME:desc,bogus:asc")
            .add_query_param("statusIds", "1,2")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["page"], 2);
        assert_eq!(body["pageSize"], 10);
        assert_eq!(
            body["sort"],
            json!([{"column": "last_name", "ascending": false}])
        );
        assert_eq!(body["filters"]["statusIds"], json!([1, 2]));
    }

    #[tokio::test]
    async fn test_rejects_malformed_ids() {
        let response = server()
            .get("/api/staff")
            .add_query_param("roleIds", "1,admin")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid id list for `roleIds`: 1,admin");
    }
}
