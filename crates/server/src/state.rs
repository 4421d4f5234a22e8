use adapter::{CommentSource, SentimentScorer};
use std::sync::Arc;

/// Built once in `main`; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CommentSource>,
    pub scorer: Arc<dyn SentimentScorer>,
}
