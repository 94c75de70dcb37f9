//! Submission of the bulk payload to the admin import endpoint.
//!
//! `JobSink` is the seam between the importer and the network; the importer
//! only ever holds a `dyn JobSink`, so a run can be exercised without HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Number, Value};
use tracing::{debug, info};

use crate::error::ImportError;
use crate::listings::BulkPayload;

/// Production import endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://jobs-dashboard-backend-wgqx.onrender.com/api/admin/recommend";

/// Endpoint of a backend running on the developer's machine.
pub const LOCAL_ENDPOINT: &str = "http://localhost:3001/api/admin/recommend";

/// Client-side timeout for the single request. Not configurable.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// What the endpoint reports back after a successful import.
///
/// Counts keep the server's number as sent, so `3.0` or `-1` print as such.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub added: Number,
    pub skipped: Number,
    pub message: String,
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self {
            added: Number::from(0u64),
            skipped: Number::from(0u64),
            message: String::new(),
        }
    }
}

impl ImportSummary {
    /// Parse a 200 response body. Missing or non-numeric counts fall back
    /// to 0 and a missing message to "" so a partial summary still prints.
    pub fn from_body(body: &str) -> Result<Self, ImportError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ImportError::InvalidResponse(format!("{}: {}", e, body)))?;

        let Some(fields) = value.as_object() else {
            return Err(ImportError::InvalidResponse(format!(
                "expected a JSON object, got {}",
                body
            )));
        };

        let count = |key: &str| match fields.get(key) {
            Some(Value::Number(n)) => n.clone(),
            _ => Number::from(0u64),
        };

        Ok(Self {
            added: count("added"),
            skipped: count("skipped"),
            message: fields
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// Destination for a bulk payload.
#[async_trait]
pub trait JobSink: Send + Sync {
    /// Human-readable location the payload is sent to.
    fn endpoint(&self) -> &str;

    async fn submit(&self, payload: &BulkPayload) -> Result<ImportSummary, ImportError>;
}

/// Sends the payload as one JSON POST.
pub struct HttpJobSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpJobSink {
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl JobSink for HttpJobSink {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(&self, payload: &BulkPayload) -> Result<ImportSummary, ImportError> {
        info!(endpoint = %self.endpoint, jobs = payload.len(), "Sending bulk import");

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Import endpoint responded");

        if status != StatusCode::OK {
            return Err(ImportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        ImportSummary::from_body(&body)
    }
}
