use acorn_core::domain::listing::entities::{ListPage, OptionItem};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ListResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Value>,
    pub total: u64,
}

impl From<ListPage<Value>> for ListResponse {
    fn from(page: ListPage<Value>) -> Self {
        Self {
            items: page.items,
            total: page.total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct OptionsResponse {
    pub options: Vec<OptionItem>,
}
