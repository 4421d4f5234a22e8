use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Refresh this long before Reddit says the token expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Application-only bearer token shared by all requests.
pub struct TokenCache {
    inner: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    pub async fn get(&self) -> Option<String> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|t| Instant::now() < t.expires_at)
            .map(|t| t.value.clone())
    }

    pub async fn store(&self, value: String, expires_in: Duration) {
        let lifetime = expires_in.saturating_sub(EXPIRY_MARGIN);
        let mut guard = self.inner.write().await;
        *guard = Some(CachedToken {
            value,
            expires_at: Instant::now() + lifetime,
        });
    }

    pub async fn clear(&self) {
        self.inner.write().await.take();
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
