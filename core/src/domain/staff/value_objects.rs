use serde::{Deserialize, Serialize};

use crate::domain::{
    listing::value_objects::FilterClause,
    query::{
        adapter::QueryFilters,
        errors::QueryError,
        list_request::{ListFilters, parse_bool, parse_id_list, parse_text},
        search_params::{QueryValue, SearchParams},
        sort::SortRule,
    },
};

use super::policies::STAFF_SORT_COLUMNS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffFilters {
    pub q: Option<String>,
    pub status_ids: Vec<i64>,
    pub role_ids: Vec<i64>,
    pub can_clean: Option<bool>,
}

impl QueryFilters for StaffFilters {
    fn query_fields(&self) -> Vec<(&'static str, QueryValue)> {
        vec![
            ("q", self.q.clone().into()),
            ("statusIds", self.status_ids.as_slice().into()),
            ("roleIds", self.role_ids.as_slice().into()),
            ("canClean", self.can_clean.into()),
        ]
    }
}

impl ListFilters for StaffFilters {
    const RESOURCE: &'static str = "staff";
    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = STAFF_SORT_COLUMNS;

    fn default_sort() -> Vec<SortRule> {
        vec![SortRule::asc("name")]
    }

    fn from_search_params(params: &SearchParams) -> Result<Self, QueryError> {
        Ok(Self {
            q: parse_text(params, "q"),
            status_ids: parse_id_list(params, "statusIds")?,
            role_ids: parse_id_list(params, "roleIds")?,
            can_clean: parse_bool(params, "canClean")?,
        })
    }

    fn to_clauses(&self) -> Vec<FilterClause> {
        let mut clauses = Vec::new();

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            clauses.push(FilterClause::ilike("name", q));
        }
        if !self.status_ids.is_empty() {
            clauses.push(FilterClause::in_list("status_id", &self.status_ids));
        }
        if !self.role_ids.is_empty() {
            clauses.push(FilterClause::in_list("role", &self.role_ids));
        }
        if let Some(can_clean) = self.can_clean {
            clauses.push(FilterClause::eq("can_clean", can_clean));
        }

        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        query::{adapter::AdapterInput, list_request::ListRequest, pagination::Pagination, sort::SortEntry},
        staff::policies::staff_adapter,
    };

    #[test]
    fn test_adapter_encodes_staff_state() {
        let input = AdapterInput {
            filters: StaffFilters {
                q: None,
                status_ids: vec![1, 2],
                role_ids: vec![],
                can_clean: Some(false),
            },
            sort: vec![SortEntry::new("lastName", false), SortEntry::new("firstName", false)],
            pagination: Pagination::new(3, 50),
        };

        assert_eq!(
            staff_adapter().to_api_params(&input).to_string(),
            "statusIds=1%2C2&canClean=false&page=3&pageSize=50&sort=last_name%3Aasc%2Cfirst_name%3Aasc"
        );
        assert_eq!(staff_adapter().endpoint(), "/api/staff");
    }

    #[test]
    fn test_unmapped_sort_id_passes_through_but_is_dropped_by_server() {
        let input = AdapterInput {
            filters: StaffFilters::default(),
            sort: vec![SortEntry::new("hireDate", true), SortEntry::new("role", false)],
            pagination: Pagination::default(),
        };

        let params = staff_adapter().to_api_params(&input);
        assert_eq!(params.get("sort"), Some("hireDate:desc,role:asc"));

        let request = ListRequest::<StaffFilters>::from_search_params(&params).unwrap();
        assert_eq!(request.sort, vec![SortRule::asc("role")]);
    }

    #[test]
    fn test_decodes_and_builds_clauses() {
        let request =
            ListRequest::<StaffFilters>::from_query("q=ana&roleIds=3&canClean=true&sort=name%3Adesc")
                .unwrap();

        let query = request.into_resource_query();
        assert_eq!(query.resource, "staff");
        assert_eq!(query.order, vec![SortRule::desc("name")]);
        assert_eq!(
            query.filters,
            vec![
                FilterClause::ilike("name", "ana"),
                FilterClause::in_list("role", &[3]),
                FilterClause::eq("can_clean", true),
            ]
        );
    }
}
