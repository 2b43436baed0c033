//! HTTP client for federated AM endpoints.
//!
//! A federated service answers `GET <am_url>?prefix=<rest>` with a JSON array
//! of [`AmEntry`] whose prefixes are relative to the service's own namespace.

use am_listing_sdk::{AmEntry, Phase};
use async_trait::async_trait;
use iam_security::SecurityContext;
use secrecy::ExposeSecret;
use tracing::{debug, warn};
use url::Url;

use crate::config::RemoteAmConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::RemoteAmFetcher;

pub struct HttpRemoteAmClient {
    client: reqwest::Client,
    forward_bearer_token: bool,
}

impl HttpRemoteAmClient {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(config: &RemoteAmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            forward_bearer_token: config.forward_bearer_token,
        })
    }
}

#[async_trait]
impl RemoteAmFetcher for HttpRemoteAmClient {
    async fn fetch(
        &self,
        ctx: &SecurityContext,
        am_url: &str,
        prefix: &str,
    ) -> Result<Vec<AmEntry>, DomainError> {
        let url = Url::parse(am_url).map_err(|e| DomainError::InvalidAmUrl {
            url: am_url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut request = self.client.get(url).query(&[("prefix", prefix)]);
        if self.forward_bearer_token
            && let Some(token) = ctx.bearer_token()
        {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::adapter(Phase::RemoteAm, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!(am_url, %status, "AM endpoint rejected listing");
            return Err(DomainError::RemoteStatus {
                url: am_url.to_owned(),
                status: status.as_u16(),
            });
        }

        let entries: Vec<AmEntry> = response.json().await.map_err(|e| {
            DomainError::adapter(Phase::RemoteAm, format!("malformed AM response: {e}"))
        })?;
        debug!(am_url, count = entries.len(), "fetched remote entries");
        Ok(entries)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn client(forward_bearer_token: bool) -> HttpRemoteAmClient {
        HttpRemoteAmClient::new(&RemoteAmConfig {
            forward_bearer_token,
            ..RemoteAmConfig::default()
        })
        .unwrap()
    }

    fn ctx_with_token() -> SecurityContext {
        SecurityContext::builder()
            .subject_id(Uuid::new_v4())
            .bearer_token("secret-token".to_owned())
            .build()
    }

    #[tokio::test]
    async fn decodes_entries_and_sends_the_encoded_prefix() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/am")
                    .query_param("prefix", "Deploy::sniper");
                then.status(200).json_body(json!([
                    { "prefix": "Deploy::sniper-3d", "alias": "Sniper 3D", "complete": true },
                    { "prefix": "Deploy::sniper-red" }
                ]));
            })
            .await;

        let entries = client(true)
            .fetch(&SecurityContext::anonymous(), &server.url("/am"), "Deploy::sniper")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            entries,
            [
                AmEntry::leaf("Deploy::sniper-3d", "Sniper 3D"),
                AmEntry::branch("Deploy::sniper-red"),
            ]
        );
    }

    #[tokio::test]
    async fn forwards_the_bearer_token_when_allowed() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/am")
                    .header("authorization", "Bearer secret-token");
                then.status(200).json_body(json!([]));
            })
            .await;

        client(true)
            .fetch(&ctx_with_token(), &server.url("/am"), "")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn keeps_the_bearer_token_when_forwarding_is_off() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/am").header_missing("authorization");
                then.status(200).json_body(json!([]));
            })
            .await;

        client(false)
            .fetch(&ctx_with_token(), &server.url("/am"), "")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_the_url() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/am");
                then.status(503);
            })
            .await;
        let url = server.url("/am");

        let err = client(true)
            .fetch(&SecurityContext::anonymous(), &url, "")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::RemoteStatus { status: 503, url: u } if u == url));
    }

    #[tokio::test]
    async fn malformed_body_is_an_adapter_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/am");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = client(true)
            .fetch(&SecurityContext::anonymous(), &server.url("/am"), "")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Adapter {
                phase: Phase::RemoteAm,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unparsable_url_never_hits_the_network() {
        let err = client(true)
            .fetch(&SecurityContext::anonymous(), "not a url", "")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidAmUrl { .. }));
    }
}
