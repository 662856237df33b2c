use serde::{Deserialize, Serialize};

use crate::domain::{
    listing::value_objects::FilterClause,
    query::{
        adapter::QueryFilters,
        errors::QueryError,
        list_request::{ListFilters, parse_id_list, parse_integer, parse_text},
        search_params::{QueryValue, SearchParams},
        sort::SortRule,
    },
};

use super::policies::PROPERTY_SORT_COLUMNS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilters {
    pub q: Option<String>,
    pub status_ids: Vec<i64>,
    pub min_cleaning_mins: Option<i64>,
    pub max_cleaning_mins: Option<i64>,
}

impl QueryFilters for PropertyFilters {
    fn query_fields(&self) -> Vec<(&'static str, QueryValue)> {
        vec![
            ("q", self.q.clone().into()),
            ("statusIds", self.status_ids.as_slice().into()),
            ("minCleaningMins", self.min_cleaning_mins.into()),
            ("maxCleaningMins", self.max_cleaning_mins.into()),
        ]
    }
}

impl ListFilters for PropertyFilters {
    const RESOURCE: &'static str = "properties";
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = PROPERTY_SORT_COLUMNS;

    fn default_sort() -> Vec<SortRule> {
        vec![SortRule::asc("property_name")]
    }

    fn from_search_params(params: &SearchParams) -> Result<Self, QueryError> {
        Ok(Self {
            q: parse_text(params, "q"),
            status_ids: parse_id_list(params, "statusIds")?,
            min_cleaning_mins: parse_integer(params, "minCleaningMins")?,
            max_cleaning_mins: parse_integer(params, "maxCleaningMins")?,
        })
    }

    fn to_clauses(&self) -> Vec<FilterClause> {
        let mut clauses = Vec::new();

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            clauses.push(FilterClause::ilike("property_name", q));
        }
        if !self.status_ids.is_empty() {
            clauses.push(FilterClause::in_list("status_id", &self.status_ids));
        }
        if let Some(min) = self.min_cleaning_mins {
            clauses.push(FilterClause::gte("estimated_cleaning_mins", min));
        }
        if let Some(max) = self.max_cleaning_mins {
            clauses.push(FilterClause::lte("estimated_cleaning_mins", max));
        }

        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        property::policies::{legacy_property_adapter, properties_adapter},
        query::{adapter::AdapterInput, list_request::ListRequest, pagination::Pagination, sort::SortEntry},
    };

    #[test]
    fn test_adapter_encodes_cleaning_window() {
        let input = AdapterInput {
            filters: PropertyFilters {
                q: Some("Ocean View".to_string()),
                status_ids: vec![1],
                min_cleaning_mins: Some(30),
                max_cleaning_mins: None,
            },
            sort: vec![SortEntry::new("estimatedCleaningMins", true)],
            pagination: Pagination::new(1, 25),
        };

        assert_eq!(
            properties_adapter().to_url(&input),
            "/api/properties?q=Ocean+View&statusIds=1&minCleaningMins=30&page=1&pageSize=25&sort=estimated_cleaning_mins%3Adesc"
        );
    }

    #[test]
    fn test_legacy_adapter_uses_older_column_ids() {
        let input = AdapterInput {
            filters: PropertyFilters::default(),
            sort: vec![
                SortEntry::new("propertyName", false),
                SortEntry::new("cleaningTime", true),
            ],
            pagination: Pagination::default(),
        };

        let adapter = legacy_property_adapter();
        assert_eq!(adapter.endpoint(), "/api/properties");

        let query = adapter.to_api_params(&input).to_string();
        let request = ListRequest::<PropertyFilters>::from_query(&query).unwrap();
        assert_eq!(
            request.sort,
            vec![
                SortRule::asc("property_name"),
                SortRule::desc("estimated_cleaning_mins"),
            ]
        );
    }

    #[test]
    fn test_decodes_and_builds_clauses() {
        let request = ListRequest::<PropertyFilters>::from_query(
            "q=%20beach%20&statusIds=1,2&minCleaningMins=45&maxCleaningMins=90",
        )
        .unwrap();

        assert_eq!(request.filters.q.as_deref(), Some("beach"));
        assert_eq!(
            request.filters.to_clauses(),
            vec![
                FilterClause::ilike("property_name", "beach"),
                FilterClause::in_list("status_id", &[1, 2]),
                FilterClause::gte("estimated_cleaning_mins", 45),
                FilterClause::lte("estimated_cleaning_mins", 90),
            ]
        );

        let query = request.into_resource_query();
        assert_eq!(query.resource, "properties");
        assert_eq!(query.order, vec![SortRule::asc("property_name")]);
    }

    #[test]
    fn test_rejects_non_numeric_cleaning_minutes() {
        let err = ListRequest::<PropertyFilters>::from_query("minCleaningMins=soon").unwrap_err();
        assert!(matches!(err, QueryError::InvalidInteger { .. }));
    }
}
