use chrono::{DateTime, Utc};

use crate::domain::listing::value_objects::{FilterClause, ResourceQuery};

use super::{
    errors::QueryError,
    pagination::{DEFAULT_PAGE_SIZE, Pagination},
    search_params::SearchParams,
    sort::{SortRule, parse_sort_param},
};

/// Server-side view of an entity's filters.
pub trait ListFilters: Sized {
    /// Backing table or view.
    const RESOURCE: &'static str;
    /// Column projection requested from the backend.
    const SELECT: &'static str = "*";
    /// Allowed sort keys and the columns they order by.
    const SORT_COLUMNS: &'static [(&'static str, &'static str)];

    /// Ordering applied when the request carries no usable sort rule.
    fn default_sort() -> Vec<SortRule>;

    fn from_search_params(params: &SearchParams) -> Result<Self, QueryError>;

    fn to_clauses(&self) -> Vec<FilterClause>;
}

/// A decoded list endpoint request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest<F> {
    pub pagination: Pagination,
    pub sort: Vec<SortRule>,
    pub filters: F,
}

impl<F> ListRequest<F>
where
    F: ListFilters,
{
    pub fn from_search_params(params: &SearchParams) -> Result<Self, QueryError> {
        let page = parse_integer(params, "page")?.unwrap_or(1);
        let page_size = parse_integer(params, "pageSize")?.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));

        let pagination = Pagination::new(to_u32(page), to_u32(page_size)).normalized();
        let sort = parse_sort_param(params.get("sort"), F::SORT_COLUMNS);
        let filters = F::from_search_params(params)?;

        Ok(Self {
            pagination,
            sort,
            filters,
        })
    }

    pub fn from_query(query: &str) -> Result<Self, QueryError> {
        Self::from_search_params(&SearchParams::parse(query))
    }

    pub fn into_resource_query(self) -> ResourceQuery {
        let order = if self.sort.is_empty() {
            F::default_sort()
        } else {
            self.sort
        };

        ResourceQuery {
            resource: F::RESOURCE,
            select: F::SELECT,
            filters: self.filters.to_clauses(),
            order,
            offset: self.pagination.offset(),
            limit: self.pagination.limit(),
        }
    }
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn present<'a>(params: &'a SearchParams, name: &str) -> Option<&'a str> {
    params.get(name).map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed free text; blank means absent.
pub fn parse_text(params: &SearchParams, name: &str) -> Option<String> {
    present(params, name).map(str::to_string)
}

pub fn parse_integer(params: &SearchParams, name: &str) -> Result<Option<i64>, QueryError> {
    present(params, name)
        .map(|raw| {
            raw.parse::<i64>().map_err(|_| QueryError::InvalidInteger {
                param: name.to_string(),
                value: raw.to_string(),
            })
        })
        .transpose()
}

/// Comma-separated integer ids; empty segments are ignored.
pub fn parse_id_list(params: &SearchParams, name: &str) -> Result<Vec<i64>, QueryError> {
    let Some(raw) = present(params, name) else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| QueryError::InvalidIdList {
                param: name.to_string(),
                value: raw.to_string(),
            })
        })
        .collect()
}

pub fn parse_timestamp(
    params: &SearchParams,
    name: &str,
) -> Result<Option<DateTime<Utc>>, QueryError> {
    present(params, name)
        .map(|raw| {
            raw.parse::<DateTime<Utc>>()
                .map_err(|_| QueryError::InvalidTimestamp {
                    param: name.to_string(),
                    value: raw.to_string(),
                })
        })
        .transpose()
}

pub fn parse_bool(params: &SearchParams, name: &str) -> Result<Option<bool>, QueryError> {
    present(params, name)
        .map(|raw| {
            raw.to_lowercase()
                .parse::<bool>()
                .map_err(|_| QueryError::InvalidBoolean {
                    param: name.to_string(),
                    value: raw.to_string(),
                })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::value_objects::FilterOperator;

    #[derive(Debug, PartialEq)]
    struct TagFilters {
        tag_ids: Vec<i64>,
    }

    impl ListFilters for TagFilters {
        const RESOURCE: &'static str = "tags";
        const SORT_COLUMNS: &'static [(&'static str, &'static str)] =
            &[("id", "tag_id"), ("name", "tag_name")];

        fn default_sort() -> Vec<SortRule> {
            vec![SortRule::asc("tag_name")]
        }

        fn from_search_params(params: &SearchParams) -> Result<Self, QueryError> {
            Ok(Self {
                tag_ids: parse_id_list(params, "tagIds")?,
            })
        }

        fn to_clauses(&self) -> Vec<FilterClause> {
            if self.tag_ids.is_empty() {
                return Vec::new();
            }
            vec![FilterClause::in_list("tag_id", &self.tag_ids)]
        }
    }

    #[test]
    fn test_defaults_when_params_missing() {
        let request = ListRequest::<TagFilters>::from_query("").unwrap();
        assert_eq!(request.pagination, Pagination::new(1, DEFAULT_PAGE_SIZE));
        assert!(request.sort.is_empty());
        assert!(request.filters.tag_ids.is_empty());
    }

    #[test]
    fn test_decodes_paging_sort_and_filters() {
        let request =
            ListRequest::<TagFilters>::from_query("page=3&pageSize=10&sort=NAME%3Adesc%2Cbogus&tagIds=4%2C%2C5")
                .unwrap();

        assert_eq!(request.pagination, Pagination::new(3, 10));
        assert_eq!(request.sort, vec![SortRule::desc("tag_name")]);
        assert_eq!(request.filters.tag_ids, vec![4, 5]);
    }

    #[test]
    fn test_coerces_out_of_range_paging() {
        let request = ListRequest::<TagFilters>::from_query("page=-4&pageSize=0").unwrap();
        assert_eq!(request.pagination, Pagination::new(1, 1));
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = ListRequest::<TagFilters>::from_query("page=two").unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidInteger {
                param: "page".to_string(),
                value: "two".to_string(),
            }
        );

        let err = ListRequest::<TagFilters>::from_query("tagIds=1,x").unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdList { .. }));
    }

    #[test]
    fn test_resource_query_uses_default_sort() {
        let query = ListRequest::<TagFilters>::from_query("page=2&pageSize=15&tagIds=7")
            .unwrap()
            .into_resource_query();

        assert_eq!(query.resource, "tags");
        assert_eq!(query.select, "*");
        assert_eq!(query.order, vec![SortRule::asc("tag_name")]);
        assert_eq!(query.offset, 15);
        assert_eq!(query.limit, 15);
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].operator, FilterOperator::In);
        assert_eq!(query.filters[0].value, "7");
    }

    #[test]
    fn test_scalar_helpers() {
        let params = SearchParams::parse("q=+%20&flag=TRUE&when=2024-01-31T00%3A00%3A00.000Z&bad=nope");
        assert_eq!(parse_text(&params, "q"), None);
        assert_eq!(parse_bool(&params, "flag"), Ok(Some(true)));
        assert!(parse_bool(&params, "bad").is_err());
        assert_eq!(
            parse_timestamp(&params, "when")
                .unwrap()
                .map(|d| d.to_rfc3339()),
            Some("2024-01-31T00:00:00+00:00".to_string())
        );
        assert!(parse_timestamp(&params, "bad").is_err());
    }
}
