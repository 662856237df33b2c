use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single ordering directive on a database column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    pub column: String,
    pub ascending: bool,
}

impl SortRule {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }
}

/// One entry of the UI sort state, keyed by the client-side field id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub id: String,
    pub desc: bool,
}

impl SortEntry {
    pub fn new(id: impl Into<String>, desc: bool) -> Self {
        Self {
            id: id.into(),
            desc,
        }
    }
}

/// Ordered UI sort state; the first entry is the primary key.
pub type SortState = Vec<SortEntry>;

/// Client field id to API sort key, used when encoding.
pub type SortKeyMap = &'static [(&'static str, &'static str)];

/// Case-insensitive allow-list of sort keys and the columns they resolve to.
#[derive(Debug, Clone, Default)]
pub struct AllowedColumns {
    lookup: HashMap<String, String>,
}

impl AllowedColumns {
    /// Later pairs win when two keys share a lowercase form.
    pub fn new<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let lookup = pairs
            .into_iter()
            .map(|(key, column)| (key.to_lowercase(), column.to_string()))
            .collect();
        Self { lookup }
    }

    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.lookup
            .get(&key.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Parse sort string like "name:desc,status" into rules.
    /// Segments whose key is not allowed are dropped.
    pub fn parse(&self, sort: Option<&str>) -> Vec<SortRule> {
        let Some(sort) = sort.filter(|s| !s.is_empty()) else {
            return Vec::new();
        };

        let mut rules = Vec::new();
        for part in sort.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (raw_key, raw_dir) = part.split_once(':').unwrap_or((part, "asc"));
            let Some(column) = self.resolve(raw_key) else {
                debug!("Ignoring unknown sort key: {}", raw_key.trim());
                continue;
            };

            rules.push(SortRule {
                column: column.to_string(),
                ascending: raw_dir.trim().to_lowercase() != "desc",
            });
        }
        rules
    }
}

/// Decode a raw `sort` parameter against an allow-list of
/// `(client key, database column)` pairs.
pub fn parse_sort_param(sort: Option<&str>, allowed: &[(&str, &str)]) -> Vec<SortRule> {
    if sort.is_none_or(str::is_empty) {
        return Vec::new();
    }
    AllowedColumns::new(allowed.iter().copied()).parse(sort)
}

/// Encode UI sort state into the `key:dir,key:dir` wire format.
/// Ids missing from the key map are passed through verbatim.
pub fn build_sort_param(sort: &[SortEntry], sort_key_map: &[(&str, &str)]) -> String {
    sort.iter()
        .map(|entry| {
            let key = sort_key_map
                .iter()
                .find(|(id, _)| *id == entry.id)
                .map(|(_, key)| *key)
                .unwrap_or(entry.id.as_str());
            let dir = if entry.desc { "desc" } else { "asc" };
            format!("{key}:{dir}")
        })
        .collect::<Vec<_>>()
        .join(",")
}
