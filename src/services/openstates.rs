// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{BillDetail, BillSummary, Legislator, Session, StateMetadata};
use crate::error::{Error, Result};

/// Where Open States hands out API keys.
pub const REGISTER_URL: &str = "https://openstates.org/api/register/";

/// Longest slice of an error body carried into `Error::Api`.
const MAX_ERROR_BODY: usize = 200;

/// Data access used by the views.
pub trait OpenStatesApi: Send + Sync {
    fn has_api_key(&self) -> bool;

    fn legislators(&self) -> impl Future<Output = Result<Vec<Legislator>>> + Send;

    fn legislator(&self, leg_id: &str) -> impl Future<Output = Result<Option<Legislator>>> + Send;

    fn bills(&self) -> impl Future<Output = Result<Vec<BillSummary>>> + Send;

    fn bill_detail(
        &self,
        session: &Session,
        bill_id: &str,
    ) -> impl Future<Output = Result<Option<BillDetail>>> + Send;
}

pub struct OpenStatesClient {
    client: Client,
    base_url: String,
    state: String,
    api_key: Option<SecretString>,
}

impl OpenStatesClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("influencetx/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            state: config.state.clone(),
            api_key: config
                .api_key
                .as_deref()
                .filter(|k| !k.trim().is_empty())
                .map(|k| SecretString::from(k.to_string())),
        }
    }

    /// Metadata for the configured state; doubles as a connectivity check.
    pub async fn metadata(&self) -> Result<StateMetadata> {
        let url = self.endpoint(&["metadata", &self.state], &[])?;
        self.get::<StateMetadata>(url)
            .await?
            .ok_or_else(|| Error::NotFound {
                kind: "state",
                id: self.state.clone(),
            })
    }

    /// Build `{base}/seg/seg/.../?query` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base_url '{}' is invalid: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("base_url '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let key = self.api_key.as_ref().ok_or(Error::MissingApiKey)?;

        let response = self
            .client
            .get(url.clone())
            .header("X-API-KEY", key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Api {
                        status: StatusCode::REQUEST_TIMEOUT.as_u16(),
                        message: "request timed out".into(),
                    }
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        debug!(
            method = "GET",
            path = url.path(),
            status = status.as_u16(),
            "open states request"
        );

        match status {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(Error::Unauthorized),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Api {
                    status: s.as_u16(),
                    message: truncate(body.trim(), MAX_ERROR_BODY),
                });
            }
            _ => {}
        }

        let body = response.text().await?;
        decode(&body)
    }
}

impl OpenStatesApi for OpenStatesClient {
    fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn legislators(&self) -> Result<Vec<Legislator>> {
        let url = self.endpoint(
            &["legislators"],
            &[("state", self.state.as_str()), ("active", "true")],
        )?;
        let found: Option<Vec<Legislator>> = self.get(url).await?;
        Ok(found.unwrap_or_default())
    }

    async fn legislator(&self, leg_id: &str) -> Result<Option<Legislator>> {
        let url = self.endpoint(&["legislators", leg_id], &[])?;
        self.get(url).await
    }

    async fn bills(&self) -> Result<Vec<BillSummary>> {
        let url = self.endpoint(
            &["bills"],
            &[("state", self.state.as_str()), ("search_window", "session")],
        )?;
        let found: Option<Vec<BillSummary>> = self.get(url).await?;
        Ok(found.unwrap_or_default())
    }

    async fn bill_detail(&self, session: &Session, bill_id: &str) -> Result<Option<BillDetail>> {
        let url = self.endpoint(&["bills", &self.state, session.as_str(), bill_id], &[])?;
        self.get(url).await
    }
}

/// Decode an Open States JSON body; a literal `null` means "no such record".
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Option<T>> {
    serde_json::from_str::<Option<T>>(body).map_err(|e| Error::Decode(e.to_string()))
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
