use serde_json::Value;
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{
        entities::{ListPage, OptionItem},
        ports::ListRepository,
        value_objects::OptionKind,
    },
    query::list_request::{ListFilters, ListRequest},
};

pub async fn list_entities<R, F>(
    repository: &R,
    request: ListRequest<F>,
) -> Result<ListPage<Value>, CoreError>
where
    R: ListRepository,
    F: ListFilters,
{
    let query = request.into_resource_query();
    debug!(
        resource = query.resource,
        offset = query.offset,
        limit = query.limit,
        "Listing resource"
    );
    repository.list(query).await
}

pub async fn list_options<R>(repository: &R, kind: OptionKind) -> Result<Vec<OptionItem>, CoreError>
where
    R: ListRepository,
{
    repository.options(kind.source()).await
}
