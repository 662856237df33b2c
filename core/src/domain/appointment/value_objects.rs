use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    listing::value_objects::FilterClause,
    query::{
        adapter::QueryFilters,
        errors::QueryError,
        list_request::{ListFilters, parse_id_list, parse_text, parse_timestamp},
        search_params::{QueryValue, SearchParams},
        sort::SortRule,
    },
};

use super::policies::APPOINTMENT_SORT_COLUMNS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFilters {
    pub q: Option<String>,
    pub status_ids: Vec<i64>,
    pub service_ids: Vec<i64>,
    pub staff_ids: Vec<i64>,
    pub property_ids: Vec<i64>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl QueryFilters for AppointmentFilters {
    fn query_fields(&self) -> Vec<(&'static str, QueryValue)> {
        vec![
            ("q", self.q.clone().into()),
            ("statusIds", self.status_ids.as_slice().into()),
            ("serviceIds", self.service_ids.as_slice().into()),
            ("staffIds", self.staff_ids.as_slice().into()),
            ("propertyIds", self.property_ids.as_slice().into()),
            ("dateFrom", self.date_from.into()),
            ("dateTo", self.date_to.into()),
        ]
    }
}

impl ListFilters for AppointmentFilters {
    const RESOURCE: &'static str = "appointments";
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = APPOINTMENT_SORT_COLUMNS;

    fn default_sort() -> Vec<SortRule> {
        vec![SortRule::asc("service_time")]
    }

    fn from_search_params(params: &SearchParams) -> Result<Self, QueryError> {
        Ok(Self {
            q: parse_text(params, "q"),
            status_ids: parse_id_list(params, "statusIds")?,
            service_ids: parse_id_list(params, "serviceIds")?,
            staff_ids: parse_id_list(params, "staffIds")?,
            property_ids: parse_id_list(params, "propertyIds")?,
            date_from: parse_timestamp(params, "dateFrom")?,
            date_to: parse_timestamp(params, "dateTo")?,
        })
    }

    fn to_clauses(&self) -> Vec<FilterClause> {
        let mut clauses = Vec::new();

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            clauses.push(FilterClause::ilike("property_name", q));
        }
        if !self.status_ids.is_empty() {
            clauses.push(FilterClause::in_list("status", &self.status_ids));
        }
        if !self.service_ids.is_empty() {
            clauses.push(FilterClause::in_list("service", &self.service_ids));
        }
        if !self.property_ids.is_empty() {
            clauses.push(FilterClause::in_list("property", &self.property_ids));
        }
        if !self.staff_ids.is_empty() {
            clauses.push(FilterClause::overlaps("staff_ids", &self.staff_ids));
        }
        if let Some(date_from) = self.date_from {
            clauses.push(FilterClause::gte("service_time", timestamp(date_from)));
        }
        if let Some(date_to) = self.date_to {
            clauses.push(FilterClause::lte("service_time", timestamp(date_to)));
        }

        clauses
    }
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
