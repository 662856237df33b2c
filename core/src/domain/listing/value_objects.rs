use std::str::FromStr;

use crate::domain::query::sort::SortRule;

/// Comparison applied by a [`FilterClause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,       // equals
    In,       // in list (comma-separated)
    Overlaps, // array column shares an element with the list
    Gte,      // greater than or equal
    Lte,      // less than or equal
    Ilike,    // case-insensitive substring match
}

/// A single backend-neutral filter on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub column: &'static str,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterClause {
    pub fn new(column: &'static str, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            column,
            operator,
            value: value.into(),
        }
    }

    pub fn eq(column: &'static str, value: impl ToString) -> Self {
        Self::new(column, FilterOperator::Eq, value.to_string())
    }

    pub fn in_list(column: &'static str, ids: &[i64]) -> Self {
        Self::new(column, FilterOperator::In, join_ids(ids))
    }

    pub fn overlaps(column: &'static str, ids: &[i64]) -> Self {
        Self::new(column, FilterOperator::Overlaps, join_ids(ids))
    }

    pub fn gte(column: &'static str, value: impl ToString) -> Self {
        Self::new(column, FilterOperator::Gte, value.to_string())
    }

    pub fn lte(column: &'static str, value: impl ToString) -> Self {
        Self::new(column, FilterOperator::Lte, value.to_string())
    }

    pub fn ilike(column: &'static str, text: impl Into<String>) -> Self {
        Self::new(column, FilterOperator::Ilike, text)
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",")
}

/// Everything a backend needs to fetch one page of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub resource: &'static str,
    pub select: &'static str,
    pub filters: Vec<FilterClause>,
    pub order: Vec<SortRule>,
    pub offset: u64,
    pub limit: u64,
}

/// Lookup table backing an options endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSource {
    pub resource: &'static str,
    pub id_column: &'static str,
    pub label_column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Services,
    AppointmentStatuses,
    PropertyStatuses,
    StaffStatuses,
    Roles,
    Properties,
    Staff,
}

impl OptionKind {
    pub fn source(&self) -> OptionSource {
        let (resource, id_column, label_column) = match self {
            OptionKind::Services => ("service", "service_id", "name"),
            OptionKind::AppointmentStatuses => ("appointment_status", "status_id", "status"),
            OptionKind::PropertyStatuses => ("property_status_key", "status_id", "status"),
            OptionKind::StaffStatuses => ("staff_status_key", "status_id", "status"),
            OptionKind::Roles => ("roles", "id", "title"),
            OptionKind::Properties => ("properties", "properties_id", "property_name"),
            OptionKind::Staff => ("staff", "user_id", "name"),
        };
        OptionSource {
            resource,
            id_column,
            label_column,
        }
    }
}

impl FromStr for OptionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "services" => Ok(OptionKind::Services),
            "appointment-statuses" => Ok(OptionKind::AppointmentStatuses),
            "property-statuses" => Ok(OptionKind::PropertyStatuses),
            "staff-statuses" => Ok(OptionKind::StaffStatuses),
            "roles" => Ok(OptionKind::Roles),
            "properties" => Ok(OptionKind::Properties),
            "staff" => Ok(OptionKind::Staff),
            _ => Err(()),
        }
    }
}
