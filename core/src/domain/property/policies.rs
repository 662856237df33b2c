use crate::domain::query::adapter::{AdapterConfig, EntityAdapter};

use super::value_objects::PropertyFilters;

pub const PROPERTY_SORT_KEYS: &[(&str, &str)] =
    &[("estimatedCleaningMins", "estimated_cleaning_mins")];

/// Column ids used by the older property table.
pub const LEGACY_PROPERTY_SORT_KEYS: &[(&str, &str)] = &[
    ("propertyName", "name"),
    ("cleaningTime", "estimated_cleaning_mins"),
];

/// Sort keys accepted by `/api/properties`.
pub const PROPERTY_SORT_COLUMNS: &[(&str, &str)] = &[
    ("id", "properties_id"),
    ("name", "property_name"),
    ("status", "status_id"),
    ("estimated_cleaning_mins", "estimated_cleaning_mins"),
];

pub const PROPERTIES_ADAPTER: AdapterConfig = AdapterConfig {
    endpoint: "/api/properties",
    sort_keys: PROPERTY_SORT_KEYS,
};

pub const LEGACY_PROPERTY_ADAPTER: AdapterConfig = AdapterConfig {
    endpoint: "/api/properties",
    sort_keys: LEGACY_PROPERTY_SORT_KEYS,
};

pub fn properties_adapter() -> EntityAdapter<PropertyFilters> {
    EntityAdapter::new(PROPERTIES_ADAPTER)
}

pub fn legacy_property_adapter() -> EntityAdapter<PropertyFilters> {
    EntityAdapter::new(LEGACY_PROPERTY_ADAPTER)
}
