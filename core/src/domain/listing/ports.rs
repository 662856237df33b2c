use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{
        entities::{ListPage, OptionItem},
        value_objects::{OptionSource, ResourceQuery},
    },
};

/// Read side of the backing database for list and options endpoints.
#[cfg_attr(test, mockall::automock)]
pub trait ListRepository: Send + Sync {
    fn list(
        &self,
        query: ResourceQuery,
    ) -> impl Future<Output = Result<ListPage<Value>, CoreError>> + Send;

    fn options(
        &self,
        source: OptionSource,
    ) -> impl Future<Output = Result<Vec<OptionItem>, CoreError>> + Send;
}
