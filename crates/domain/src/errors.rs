use thiserror::Error;

/// Failures talking to the forum API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("community {0} does not exist")]
    CommunityNotFound(String),

    #[error("community {0} is private or banned")]
    CommunityForbidden(String),

    #[error("forum API rejected the credentials")]
    Unauthorized,

    #[error("forum API rate limit reached")]
    RateLimited,

    #[error("forum API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("forum API request failed: {0}")]
    Request(String),

    #[error("forum API returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("failed to score comment {id}: {reason}")]
    Scorer { id: String, reason: String },
}

/// Everything that can stop an `/analyse` request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error("{0}")]
    EmptyResult(String),
}
