use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

/// A value destined for a query string parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl QueryValue {
    /// Null, empty text and empty lists never reach the query string.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryValue::Null => true,
            QueryValue::Text(text) => text.is_empty(),
            QueryValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    fn into_param(self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self {
            QueryValue::Null => None,
            QueryValue::Text(text) => Some(text),
            QueryValue::Integer(value) => Some(value.to_string()),
            QueryValue::Float(value) => Some(value.to_string()),
            QueryValue::Bool(value) => Some(value.to_string()),
            QueryValue::List(items) => Some(items.join(",")),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// Timestamps are written as ISO-8601 with milliseconds and a `Z` suffix.
impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        QueryValue::Text(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<&[i64]> for QueryValue {
    fn from(values: &[i64]) -> Self {
        QueryValue::List(values.iter().map(i64::to_string).collect())
    }
}

impl From<Vec<i64>> for QueryValue {
    fn from(values: Vec<i64>) -> Self {
        QueryValue::from(values.as_slice())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

impl<T> From<Option<T>> for QueryValue
where
    T: Into<QueryValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(QueryValue::Null)
    }
}

/// Ordered query string parameters with URLSearchParams semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query (no leading `?`).
    pub fn parse(query: &str) -> Self {
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the first occurrence of `name` and drop any others, or append.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.pairs.iter().position(|(key, _)| *key == name) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(key, _)| {
                    if *key != name {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((name, value)),
        }
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

/// Build search params from `(name, value)` fields, skipping empty values.
pub fn to_search_params<K, I>(fields: I) -> SearchParams
where
    K: Into<String>,
    I: IntoIterator<Item = (K, QueryValue)>,
{
    let mut params = SearchParams::new();
    for (name, value) in fields {
        if let Some(value) = value.into_param() {
            params.set(name, value);
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_omits_empty_values() {
        let params = to_search_params([
            ("q", QueryValue::from(None::<String>)),
            ("statusIds", QueryValue::from(Vec::<i64>::new())),
            ("search", QueryValue::from("")),
            ("page", QueryValue::from(2_i64)),
        ]);
        assert_eq!(params.to_string(), "page=2");
    }

    #[test]
    fn test_joins_lists_with_commas() {
        let params = to_search_params([("statusIds", QueryValue::from(vec![4_i64, 5]))]);
        assert_eq!(params.get("statusIds"), Some("4,5"));
        assert!(params.to_string().contains("statusIds=4%2C5"));
    }

    #[test]
    fn test_stringifies_scalars() {
        let params = to_search_params([
            ("canClean", QueryValue::from(true)),
            ("ratio", QueryValue::from(1.5_f64)),
            ("whole", QueryValue::from(2.0_f64)),
            ("sort", QueryValue::from("name:asc")),
            ("q", QueryValue::from("ocean view")),
        ]);
        assert_eq!(
            params.to_string(),
            "canClean=true&ratio=1.5&whole=2&sort=name%3Aasc&q=ocean+view"
        );
    }

    #[test]
    fn test_encodes_timestamps_with_millis() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let params = to_search_params([("dateFrom", QueryValue::from(date))]);
        assert_eq!(params.get("dateFrom"), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(params.to_string(), "dateFrom=2024-01-01T00%3A00%3A00.000Z");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = SearchParams::new();
        params.append("page", "1");
        params.append("q", "a");
        params.append("page", "3");
        params.set("page", "2");
        assert_eq!(params.to_string(), "page=2&q=a");
    }

    #[test]
    fn test_parse_decodes_query() {
        let params = SearchParams::parse("statusIds=4%2C5&q=ocean+view&sort=name%3Adesc");
        assert_eq!(params.get("statusIds"), Some("4,5"));
        assert_eq!(params.get("q"), Some("ocean view"));
        assert_eq!(params.get("sort"), Some("name:desc"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 3);
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("statusIds", "4,5"), ("q", "ocean view"), ("sort", "name:desc")]
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let build = || {
            to_search_params([
                ("b", QueryValue::from(1_i64)),
                ("a", QueryValue::from("x")),
            ])
        };
        assert_eq!(build().to_string(), build().to_string());
        assert_eq!(build().to_string(), "b=1&a=x");
    }
}
