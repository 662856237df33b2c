use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of rows plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

/// `{id, label}` pair feeding selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OptionItem {
    pub id: i64,
    pub label: String,
}
