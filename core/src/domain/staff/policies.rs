use crate::domain::query::adapter::{AdapterConfig, EntityAdapter};

use super::value_objects::StaffFilters;

pub const STAFF_SORT_KEYS: &[(&str, &str)] = &[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("role", "role"),
];

/// Sort keys accepted by `/api/staff`.
pub const STAFF_SORT_COLUMNS: &[(&str, &str)] = &[
    ("id", "user_id"),
    ("name", "name"),
    ("first_name", "first_name"),
    ("last_name", "last_name"),
    ("role", "role"),
    ("status", "status_id"),
];

pub const STAFF_ADAPTER: AdapterConfig = AdapterConfig {
    endpoint: "/api/staff",
    sort_keys: STAFF_SORT_KEYS,
};

pub fn staff_adapter() -> EntityAdapter<StaffFilters> {
    EntityAdapter::new(STAFF_ADAPTER)
}
