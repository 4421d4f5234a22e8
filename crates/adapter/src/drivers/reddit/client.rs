use async_trait::async_trait;
use domain::{Comment, CommunityName, UpstreamError};
use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::auth::TokenCache;
use super::listing::{Listing, TokenResponse};
use crate::traits::CommentSource;

/// Used when Reddit omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

#[derive(Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    /// e.g. `https://www.reddit.com`
    pub auth_url: String,
    /// e.g. `https://oauth.reddit.com`
    pub api_url: String,
    pub timeout: Duration,
}

pub struct RedditClient {
    config: RedditConfig,
    http: Client,
    token: TokenCache,
}

impl RedditClient {
    pub fn new(config: RedditConfig) -> Result<Self, UpstreamError> {
        // Reddit answers unknown subreddits with a redirect to its search page.
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(redirect::Policy::none())
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        Ok(Self {
            config,
            http,
            token: TokenCache::new(),
        })
    }

    async fn access_token(&self) -> Result<String, UpstreamError> {
        if let Some(token) = self.token.get().await {
            return Ok(token);
        }

        debug!("Requesting a new Reddit access token");
        let url = format!(
            "{}/api/v1/access_token",
            self.config.auth_url.trim_end_matches('/')
        );
        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(UpstreamError::Unauthorized);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;
        if let Some(err) = parsed.error {
            warn!("Reddit refused the token request: {}", err);
            return Err(UpstreamError::Unauthorized);
        }
        let token = parsed.access_token.ok_or_else(|| {
            UpstreamError::InvalidResponse("token response has no access_token".to_string())
        })?;

        let lifetime = parsed
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);
        self.token.store(token.clone(), lifetime).await;

        Ok(token)
    }
}

#[async_trait]
impl CommentSource for RedditClient {
    async fn recent_comments(
        &self,
        community: &CommunityName,
        limit: u32,
    ) -> Result<Vec<Comment>, UpstreamError> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/r/{}/comments",
            self.config.api_url.trim_end_matches('/'),
            community.as_str()
        );

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .query(&[("limit", limit.to_string()), ("raw_json", "1".to_string())])
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            // Token was revoked or expired early; next request fetches a fresh one.
            self.token.clear().await;
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(map_status(status, community, body));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        let listing: Listing = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;

        listing.into_comments()
    }
}

fn map_status(status: StatusCode, community: &CommunityName, body: String) -> UpstreamError {
    match status {
        s if s.is_redirection() || s == StatusCode::NOT_FOUND => {
            UpstreamError::CommunityNotFound(community.to_string())
        }
        StatusCode::FORBIDDEN => UpstreamError::CommunityForbidden(community.to_string()),
        StatusCode::UNAUTHORIZED => UpstreamError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited,
        s => UpstreamError::Status {
            status: s.as_u16(),
            body,
        },
    }
}
