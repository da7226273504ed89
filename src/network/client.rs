//! Thin REST client for account resources and table items

use anyhow::Context;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};
use crate::{
    config::Config,
    errors::{LendingError, LendingResult},
};

#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl NodeClient {
    pub fn new(endpoint: &str, timeout: Duration) -> LendingResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                warn!("⚠️ Failed to initialize HTTP client: {}", e);
                LendingError::Network {
                    message: "Failed to build HTTP client".to_string(),
                    source: Some(e.into()),
                }
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> LendingResult<Self> {
        Self::new(&config.node_url, Duration::from_secs(config.request_timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `data` of the resource `resource_type` stored under `account`.
    pub async fn get_resource(&self, account: &str, resource_type: &str) -> LendingResult<Value> {
        let url = format!("{}/v1/accounts/{}/resource/{}", self.endpoint, account, resource_type);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| LendingError::Network {
            message: format!("GET {} failed", url),
            source: Some(e.into()),
        })?;

        let mut body = read_json(response, &format!("{} at {}", resource_type, account)).await?;
        match body.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Err(LendingError::parsing(
                format!("{} at {}", resource_type, account),
                anyhow::anyhow!("response has no 'data' field"),
            )),
        }
    }

    /// Value stored under `key` in the table `handle`.
    pub async fn get_table_item(
        &self,
        handle: &str,
        key_type: &str,
        value_type: &str,
        key: &str,
    ) -> LendingResult<Value> {
        let url = format!("{}/v1/tables/{}/item", self.endpoint, handle);
        let body = json!({
            "key_type": key_type,
            "value_type": value_type,
            "key": key,
        });
        debug!("POST {} key={}", url, key);

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| LendingError::Network {
            message: format!("POST {} failed", url),
            source: Some(e.into()),
        })?;

        read_json(response, &format!("{}[{}] in table {}", value_type, key, handle)).await
    }
}

async fn read_json(response: reqwest::Response, what: &str) -> LendingResult<Value> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(LendingError::NotFound {
            resource: what.to_string(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("⚠️ Node returned error status {} for {}: {}", status, what, body);
        return Err(LendingError::Network {
            message: format!("Node error {} for {}", status, what),
            source: Some(anyhow::anyhow!("{}", body)),
        });
    }

    response
        .json::<Value>()
        .await
        .context("Failed to parse JSON response")
        .map_err(|e| LendingError::parsing(what, e))
}

/// Table handle of a `Table` field inside a resource, e.g. `{"handle": "0x.."}`.
pub fn table_handle(resource: &Value, field: &str) -> LendingResult<String> {
    resource[field]["handle"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            LendingError::parsing(
                format!("table handle '{}'", field),
                anyhow::anyhow!("field '{}' has no handle", field),
            )
        })
}

/// A `vector<String>` field of a resource.
pub fn string_list(resource: &Value, field: &str) -> LendingResult<Vec<String>> {
    let items = resource[field].as_array().ok_or_else(|| {
        LendingError::parsing(
            format!("list '{}'", field),
            anyhow::anyhow!("field '{}' is not an array", field),
        )
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                LendingError::parsing(
                    format!("list '{}'", field),
                    anyhow::anyhow!("non-string entry {}", item),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_handles_and_lists() {
        let resource = json!({
            "supply_coins": ["0x1::aptos_coin::AptosCoin"],
            "supply_position": { "handle": "0xfeed" },
            "bad": [1, 2],
        });
        assert_eq!(table_handle(&resource, "supply_position").unwrap(), "0xfeed");
        assert_eq!(string_list(&resource, "supply_coins").unwrap(), vec!["0x1::aptos_coin::AptosCoin"]);
        assert!(table_handle(&resource, "borrow_position").is_err());
        assert!(string_list(&resource, "bad").is_err());
    }

    #[test]
    fn endpoint_is_normalized() {
        let client = NodeClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }
}
