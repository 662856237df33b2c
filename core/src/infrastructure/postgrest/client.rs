use reqwest::{Client, Response, StatusCode, header::CONTENT_RANGE};
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use crate::{
    domain::{
        common::{BackendConfig, entities::app_errors::CoreError},
        listing::{
            entities::{ListPage, OptionItem},
            ports::ListRepository,
            value_objects::{OptionSource, ResourceQuery},
        },
    },
    infrastructure::postgrest::query::{list_query_pairs, options_query_pairs, parse_content_range},
};

#[derive(Debug, Clone)]
pub struct PostgrestRepository {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl PostgrestRepository {
    pub fn new(config: &BackendConfig) -> Result<Self, CoreError> {
        let mut raw = config.url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|e| {
            CoreError::InvalidConfiguration(format!("Invalid backend url '{}': {}", config.url, e))
        })?;

        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            client: Client::new(),
        })
    }

    pub fn resource_url(&self, resource: &str) -> Result<Url, CoreError> {
        self.base_url
            .join(&format!("rest/v1/{resource}"))
            .map_err(|e| {
                error!("Failed to build url for resource {}: {}", resource, e);
                CoreError::InternalServerError
            })
    }

    async fn send(
        &self,
        resource: &str,
        pairs: &[(String, String)],
        count: bool,
    ) -> Result<Response, CoreError> {
        let url = self.resource_url(resource)?;

        let mut request = self
            .client
            .get(url)
            .query(pairs)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);
        if count {
            request = request.header("Prefer", "count=exact");
        }

        request.send().await.map_err(|e| {
            error!("Backend request for {} failed: {}", resource, e);
            CoreError::ExternalServiceError(format!("Backend request failed: {}", e))
        })
    }

    async fn ensure_success(resource: &str, response: Response) -> Result<Response, CoreError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Backend error for {}: {} - {}", resource, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Backend returned error: {} - {}",
                status, error_text
            )));
        }

        Ok(response)
    }
}

fn content_range_total(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_RANGE)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_content_range)
}

impl ListRepository for PostgrestRepository {
    async fn list(&self, query: ResourceQuery) -> Result<ListPage<Value>, CoreError> {
        let pairs = list_query_pairs(&query);
        let response = self.send(query.resource, &pairs, true).await?;

        // Offset past the last row: PostgREST answers 416 with `*/total`.
        if response.status() == StatusCode::RANGE_NOT_SATISFIABLE {
            let total = content_range_total(&response).unwrap_or(0);
            debug!(
                "Offset {} is past the end of {} ({} rows)",
                query.offset, query.resource, total
            );
            return Ok(ListPage::new(Vec::new(), total));
        }

        let response = Self::ensure_success(query.resource, response).await?;
        let total = content_range_total(&response);

        let items: Vec<Value> = response.json().await.map_err(|e| {
            error!("Failed to parse {} rows: {}", query.resource, e);
            CoreError::ExternalServiceError(format!("Failed to parse backend response: {}", e))
        })?;

        let total = total.unwrap_or(items.len() as u64);
        Ok(ListPage::new(items, total))
    }

    async fn options(&self, source: OptionSource) -> Result<Vec<OptionItem>, CoreError> {
        let pairs = options_query_pairs(&source);
        let response = self.send(source.resource, &pairs, false).await?;
        let response = Self::ensure_success(source.resource, response).await?;

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            error!("Failed to parse {} options: {}", source.resource, e);
            CoreError::ExternalServiceError(format!("Failed to parse backend response: {}", e))
        })?;

        Ok(map_option_rows(&source, rows))
    }
}

/// Rows lacking an integer id or a text label are skipped.
pub fn map_option_rows(source: &OptionSource, rows: Vec<Value>) -> Vec<OptionItem> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.get(source.id_column).and_then(Value::as_i64);
            let label = row.get(source.label_column).and_then(Value::as_str);
            match (id, label) {
                (Some(id), Some(label)) => Some(OptionItem {
                    id,
                    label: label.to_string(),
                }),
                _ => {
                    warn!("Skipping malformed {} option row: {}", source.resource, row);
                    None
                }
            }
        })
        .collect()
}
