use anyhow::Result;
use async_trait::async_trait;
use domain::{Comment, CommunityName, UpstreamError};

/// Where comments come from.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Most recent `limit` comments of a community, in upstream order.
    async fn recent_comments(
        &self,
        community: &CommunityName,
        limit: u32,
    ) -> Result<Vec<Comment>, UpstreamError>;
}

/// Maps text to a compound polarity in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64>;
}
