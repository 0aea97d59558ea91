use super::AuthError;
use crate::configuration::AuthSettings;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const NO_MATCHING_KEY: &str = "Unable to find the appropriate key.";
const KEYS_UNAVAILABLE: &str = "Unable to fetch signing keys.";

/// Unknown key ids never trigger more than one fetch per this interval.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Public keys tokens may be signed with.
pub enum KeySet {
    Static(JwkSet),
    Remote(RemoteKeySet),
}

impl KeySet {
    pub fn from_settings(
        settings: &AuthSettings,
        http_client: reqwest::Client,
    ) -> Result<Self, std::io::Error> {
        match &settings.jwks_path {
            Some(path) => Self::load(path),
            None => Ok(Self::Remote(RemoteKeySet::new(
                settings.jwks_url(),
                http_client,
                Duration::from_secs(settings.jwks_cache_ttl_secs),
            ))),
        }
    }

    /// Reads a JWKS document from disk.
    pub fn load(path: &str) -> Result<Self, std::io::Error> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str::<JwkSet>(&raw)
            .map(Self::Static)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    pub async fn find(&self, kid: &str) -> Result<Jwk, AuthError> {
        match self {
            Self::Static(keys) => keys
                .find(kid)
                .cloned()
                .ok_or(AuthError::InvalidHeader(NO_MATCHING_KEY)),
            Self::Remote(remote) => remote.find(kid).await,
        }
    }
}

/// JWKS published by the issuer, fetched lazily and kept for `ttl`.
pub struct RemoteKeySet {
    url: String,
    client: reqwest::Client,
    ttl: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

struct CachedKeys {
    keys: Arc<JwkSet>,
    fetched_at: Instant,
}

impl RemoteKeySet {
    pub fn new(url: String, client: reqwest::Client, ttl: Duration) -> Self {
        Self {
            url,
            client,
            ttl,
            cache: RwLock::new(None),
        }
    }

    pub async fn find(&self, kid: &str) -> Result<Jwk, AuthError> {
        let cached = self.cached().await;
        if let Some((keys, fetched_at)) = &cached {
            if let Some(jwk) = keys.find(kid) {
                return Ok(jwk.clone());
            }
            // The issuer may have rotated keys since the last fetch.
            if fetched_at.elapsed() < MIN_REFRESH_INTERVAL {
                return Err(AuthError::InvalidHeader(NO_MATCHING_KEY));
            }
        }

        let keys = self.refresh(cached.map(|(_, fetched_at)| fetched_at)).await?;
        keys.find(kid)
            .cloned()
            .ok_or(AuthError::InvalidHeader(NO_MATCHING_KEY))
    }

    async fn cached(&self) -> Option<(Arc<JwkSet>, Instant)> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| (cached.keys.clone(), cached.fetched_at))
    }

    /// Fetches the set unless another request replaced the one seen at `seen`
    /// while this one waited for the lock. Fetches are serialized.
    async fn refresh(&self, seen: Option<Instant>) -> Result<Arc<JwkSet>, AuthError> {
        let mut cache = self.cache.write().await;
        if let Some(cached) = cache.as_ref().filter(|cached| {
            Some(cached.fetched_at) != seen && cached.fetched_at.elapsed() < self.ttl
        }) {
            return Ok(cached.keys.clone());
        }

        tracing::info!(url = %self.url, "Fetching signing keys");
        let keys = self.fetch().await.map(Arc::new).map_err(|err| {
            tracing::error!(url = %self.url, error = %err, "Failed to fetch signing keys");
            AuthError::InvalidHeader(KEYS_UNAVAILABLE)
        })?;

        *cache = Some(CachedKeys {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }

    async fn fetch(&self) -> Result<JwkSet, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await
    }
}
