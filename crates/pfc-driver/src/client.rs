//! OFC REST client
//!
//! Thin HTTP client for the controller REST API. No retries and no
//! failure handling beyond surfacing the HTTP result; recovery belongs to
//! the layers above.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use pfc_core::{OfcConfig, OfcError};

/// A single request issued against the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct OfcRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport seam for OFC communication.
#[async_trait]
pub trait OfcApi: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, OfcError>;

    async fn get(&self, path: &str) -> Result<Value, OfcError> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, OfcError> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, OfcError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, OfcError> {
        self.request(Method::DELETE, path, None).await
    }
}

/// HTTP-based OFC client.
#[derive(Debug)]
pub struct OfcClient {
    client: Client,
    base_url: String,
}

impl OfcClient {
    pub fn new(config: &OfcConfig) -> Result<Self, OfcError> {
        config
            .validate()
            .map_err(|e| OfcError::Configuration(e.to_string()))?;

        let mut builder = Client::builder().timeout(Duration::from_secs(30));

        if let (Some(cert_file), Some(key_file)) = (&config.cert_file, &config.key_file) {
            let mut pem = std::fs::read(cert_file).map_err(|e| {
                OfcError::Certificate(format!("{}: {}", cert_file.display(), e))
            })?;
            let key = std::fs::read(key_file).map_err(|e| {
                OfcError::Certificate(format!("{}: {}", key_file.display(), e))
            })?;
            pem.extend_from_slice(&key);

            let identity = reqwest::Identity::from_pem(&pem)
                .map_err(|e| OfcError::Certificate(e.to_string()))?;
            builder = builder.use_rustls_tls().identity(identity);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }
}

#[async_trait]
impl OfcApi for OfcClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, OfcError> {
        log::debug!("OFC request: {} {}", method, path);

        let url = format!("{}{}", self.base_url, path);
        let mut req_builder = self
            .client
            .request(method.clone(), &url)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let body_text = response.text().await?;

        if status >= 400 {
            return Err(OfcError::Api {
                status,
                method: method.to_string(),
                path: path.to_string(),
                message: body_text,
            });
        }

        log::debug!("OFC response: status={}, body_size={}", status, body_text.len());

        if body_text.is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str(&body_text)
                .map_err(|e| OfcError::Parse(format!("JSON parse error: {}", e)))
        }
    }
}

/// Mock OFC client for tests: records every request and replays canned
/// responses keyed by `"METHOD path"`.
#[derive(Default)]
pub struct MockOfcClient {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<OfcRequest>>,
}

impl MockOfcClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&mut self, method: Method, path: impl Into<String>, response: Value) {
        self.responses
            .insert(format!("{} {}", method, path.into()), response);
    }

    /// Requests issued so far, in order.
    pub fn requests(&self) -> Vec<OfcRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OfcApi for MockOfcClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, OfcError> {
        self.requests.lock().unwrap().push(OfcRequest {
            method: method.clone(),
            path: path.to_string(),
            body: body.cloned(),
        });

        let key = format!("{} {}", method, path);
        Ok(self.responses.get(&key).cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_client_records_requests() {
        let mut client = MockOfcClient::new();
        client.add_response(Method::POST, "/tenants", json!({}));

        let body = json!({"id": "tenant1"});
        let res = client.post("/tenants", &body).await.unwrap();
        assert_eq!(res, json!({}));

        let unmatched = client.delete("/tenants/tenant1").await.unwrap();
        assert_eq!(unmatched, Value::Null);

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "/tenants");
        assert_eq!(requests[0].body, Some(body));
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].body, None);
    }

    #[test]
    fn test_client_requires_consistent_tls_config() {
        let mut config = OfcConfig::new("127.0.0.1", 8888);
        config.key_file = Some("/etc/pfc/client.key".into());

        let err = OfcClient::new(&config).unwrap_err();
        assert!(matches!(err, OfcError::Configuration(_)));
    }

    #[test]
    fn test_missing_certificate_file() {
        let mut config = OfcConfig::new("127.0.0.1", 8888);
        config.use_ssl = true;
        config.key_file = Some("/nonexistent/client.key".into());
        config.cert_file = Some("/nonexistent/client.crt".into());

        let err = OfcClient::new(&config).unwrap_err();
        assert!(matches!(err, OfcError::Certificate(_)));
    }
}
