use std::marker::PhantomData;

use super::{
    pagination::Pagination,
    search_params::{QueryValue, SearchParams, to_search_params},
    sort::{SortKeyMap, SortState, build_sort_param},
};

/// Filters that know how to flatten themselves into query fields.
pub trait QueryFilters {
    /// Fields in encoding order; empty values are dropped by the encoder.
    fn query_fields(&self) -> Vec<(&'static str, QueryValue)>;
}

/// Static per-entity configuration for an [`EntityAdapter`].
#[derive(Debug, Clone, Copy)]
pub struct AdapterConfig {
    pub endpoint: &'static str,
    pub sort_keys: SortKeyMap,
}

/// UI list state handed to an adapter.
#[derive(Debug, Clone, Default)]
pub struct AdapterInput<F> {
    pub filters: F,
    pub sort: SortState,
    pub pagination: Pagination,
}

/// Binds one entity's filter shape to its list endpoint.
#[derive(Debug, Clone, Copy)]
pub struct EntityAdapter<F> {
    config: AdapterConfig,
    _filters: PhantomData<fn(&F)>,
}

impl<F> EntityAdapter<F>
where
    F: QueryFilters,
{
    pub const fn new(config: AdapterConfig) -> Self {
        Self {
            config,
            _filters: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.config.endpoint
    }

    pub fn to_api_params(&self, input: &AdapterInput<F>) -> SearchParams {
        let sort = build_sort_param(&input.sort, self.config.sort_keys);

        let mut fields = input.filters.query_fields();
        fields.push(("page", QueryValue::from(input.pagination.page)));
        fields.push(("pageSize", QueryValue::from(input.pagination.page_size)));
        fields.push(("sort", QueryValue::from(sort)));

        to_search_params(fields)
    }

    /// Endpoint path with the encoded query appended.
    pub fn to_url(&self, input: &AdapterInput<F>) -> String {
        let params = self.to_api_params(input);
        if params.is_empty() {
            self.config.endpoint.to_string()
        } else {
            format!("{}?{}", self.config.endpoint, params)
        }
    }
}
