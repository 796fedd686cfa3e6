use crate::config::TenantConfig;
use crate::cpi::types::{ArtifactKind, ContentPackage, IntegrationArtifact, ODataCollection};
use crate::error::{NavigatorError, Result};
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use url::Url;

// Refresh the token this long before the server says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// Read side of the tenant API consumed by the fetch commands.
pub trait DataSource: Send + Sync + 'static {
    fn content_packages(&self) -> BoxFuture<'_, Result<Vec<ContentPackage>>>;

    fn integration_artifacts<'a>(
        &'a self,
        package_id: &'a str,
        kind: ArtifactKind,
    ) -> BoxFuture<'a, Result<Vec<IntegrationArtifact>>>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        match self.expires_at {
            Some(at) => Instant::now() + TOKEN_EXPIRY_MARGIN < at,
            None => true,
        }
    }
}

/// HTTP client for the Cloud Integration OData API, authenticated with
/// OAuth2 client credentials.
pub struct CpiClient {
    http: reqwest::Client,
    base_url: Url,
    token_url: Url,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<CachedToken>>,
}

impl CpiClient {
    pub fn new(tenant: &TenantConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: with_trailing_slash(tenant.base_url.clone()),
            token_url: tenant.token_url.clone(),
            client_id: tenant.client_id.clone(),
            client_secret: tenant.client_secret.clone(),
            token: Mutex::new(None),
        }
    }

    pub fn packages_url(&self) -> Result<Url> {
        self.resource_url("IntegrationPackages")
    }

    pub fn artifacts_url(&self, package_id: &str, kind: ArtifactKind) -> Result<Url> {
        let escaped = package_id.replace('\'', "''");
        self.resource_url(&format!(
            "IntegrationPackages('{escaped}')/{}",
            kind.entity_set()
        ))
    }

    fn resource_url(&self, path: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|source| NavigatorError::InvalidUrl {
                param: "tenant.base_url".to_string(),
                source,
            })?;
        url.set_query(Some("$format=json"));
        Ok(url)
    }

    async fn access_token(&self) -> Result<String> {
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard.as_ref().filter(|t| t.is_fresh()) {
            return Ok(cached.value.clone());
        }

        let url = self.token_url.to_string();
        tracing::debug!(token_url = %url, "requesting access token");
        let response = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|source| NavigatorError::Token {
                url: url.clone(),
                reason: source.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavigatorError::Token {
                url,
                reason: status.to_string(),
            });
        }

        let body: TokenResponse = response.json().await.map_err(|source| NavigatorError::Token {
            url: url.clone(),
            reason: source.to_string(),
        })?;

        let cached = CachedToken {
            value: body.access_token,
            expires_at: body
                .expires_in
                .map(|secs| Instant::now() + Duration::from_secs(secs)),
        };
        let value = cached.value.clone();
        *guard = Some(cached);
        Ok(value)
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let token = self.access_token().await?;
        let url_text = url.to_string();
        tracing::debug!(url = %url_text, "GET");

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| NavigatorError::Request {
                url: url_text.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url_text, status = %status, "request failed");
            return Err(NavigatorError::Status {
                url: url_text,
                status,
            });
        }

        let bytes = response.bytes().await.map_err(|source| NavigatorError::Request {
            url: url_text.clone(),
            source,
        })?;
        let body: ODataCollection<T> =
            serde_json::from_slice(&bytes).map_err(|source| NavigatorError::Decode {
                url: url_text,
                source,
            })?;
        Ok(body.root.results)
    }
}

impl DataSource for CpiClient {
    fn content_packages(&self) -> BoxFuture<'_, Result<Vec<ContentPackage>>> {
        Box::pin(async move {
            let url = self.packages_url()?;
            self.get_collection(url).await
        })
    }

    fn integration_artifacts<'a>(
        &'a self,
        package_id: &'a str,
        kind: ArtifactKind,
    ) -> BoxFuture<'a, Result<Vec<IntegrationArtifact>>> {
        Box::pin(async move {
            let url = self.artifacts_url(package_id, kind)?;
            self.get_collection(url).await
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(base: &str) -> TenantConfig {
        TenantConfig {
            name: "t".to_string(),
            webui_url: None,
            base_url: Url::parse(base).unwrap(),
            token_url: Url::parse("https://auth.example.com/oauth/token").unwrap(),
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        }
    }

    #[test]
    fn packages_url_keeps_base_path() {
        let client = CpiClient::new(&tenant("https://tenant.example.com/api/v1"));
        assert_eq!(
            client.packages_url().unwrap().as_str(),
            "https://tenant.example.com/api/v1/IntegrationPackages?$format=json"
        );
    }

    #[test]
    fn artifacts_url_uses_entity_set_for_kind() {
        let client = CpiClient::new(&tenant("https://tenant.example.com/api/v1/"));
        let url = client
            .artifacts_url("Pkg1", ArtifactKind::ScriptCollection)
            .unwrap();
        assert!(url
            .as_str()
            .starts_with("https://tenant.example.com/api/v1/IntegrationPackages('Pkg1')/ScriptCollectionDesigntimeArtifacts"));
        assert_eq!(url.query(), Some("$format=json"));
    }

    #[test]
    fn cached_token_freshness() {
        let fresh = CachedToken {
            value: "a".into(),
            expires_at: Some(Instant::now() + Duration::from_secs(3600)),
        };
        let stale = CachedToken {
            value: "b".into(),
            expires_at: Some(Instant::now() + Duration::from_secs(5)),
        };
        let forever = CachedToken {
            value: "c".into(),
            expires_at: None,
        };
        assert!(fresh.is_fresh());
        assert!(!stale.is_fresh());
        assert!(forever.is_fresh());
    }
}
