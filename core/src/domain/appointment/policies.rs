use crate::domain::query::adapter::{AdapterConfig, EntityAdapter};

use super::value_objects::AppointmentFilters;

/// Table column ids of the appointments list and their API sort keys.
pub const APPOINTMENT_SORT_KEYS: &[(&str, &str)] = &[
    ("arrivalTime", "arrival_time"),
    ("serviceTime", "service_time"),
    ("nextArrivalTime", "next_arrival_time"),
    ("turnAround", "turn_around"),
    ("cancelledDate", "cancelled_date"),
];

/// Sort keys accepted by `/api/appointments`.
pub const APPOINTMENT_SORT_COLUMNS: &[(&str, &str)] = &[
    ("id", "appointment_id"),
    ("status", "status"),
    ("service", "service"),
    ("property", "property"),
    ("arrival_time", "arrival_time"),
    ("service_time", "service_time"),
    ("next_arrival_time", "next_arrival_time"),
    ("turn_around", "turn_around"),
    ("cancelled_date", "cancelled_date"),
];

pub const APPOINTMENTS_ADAPTER: AdapterConfig = AdapterConfig {
    endpoint: "/api/appointments",
    sort_keys: APPOINTMENT_SORT_KEYS,
};

pub fn appointments_adapter() -> EntityAdapter<AppointmentFilters> {
    EntityAdapter::new(APPOINTMENTS_ADAPTER)
}
