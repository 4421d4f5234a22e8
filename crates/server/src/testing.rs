//! Stand-ins for the Reddit client and the lexicon scorer.

use adapter::{CommentSource, SentimentScorer};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use domain::{Comment, CommunityName, UpstreamError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::state::AppState;

type Failure = Box<dyn Fn(&CommunityName) -> UpstreamError + Send + Sync>;

/// Returns its canned comments regardless of `limit`.
pub struct StubSource {
    comments: Vec<Comment>,
    failure: Option<Failure>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(f: impl Fn(&CommunityName) -> UpstreamError + Send + Sync + 'static) -> Self {
        Self {
            comments: Vec::new(),
            failure: Some(Box::new(f)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommentSource for StubSource {
    async fn recent_comments(
        &self,
        community: &CommunityName,
        _limit: u32,
    ) -> Result<Vec<Comment>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(f) => Err(f(community)),
            None => Ok(self.comments.clone()),
        }
    }
}

/// Looks scores up by exact text; unknown text scores 0.0. Text containing
/// "boom" makes the scorer fail.
#[derive(Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            scores: pairs.iter().map(|(t, s)| (t.to_string(), *s)).collect(),
        }
    }
}

impl SentimentScorer for FixedScorer {
    fn score(&self, text: &str) -> anyhow::Result<f64> {
        if text.contains("boom") {
            anyhow::bail!("scorer exploded");
        }
        Ok(self.scores.get(text).copied().unwrap_or(0.0))
    }
}

pub fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, 28, h, m, 0).unwrap()
}

pub fn comment(id: &str, text: &str, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        created_at,
    }
}

/// The two comments used throughout: "a" loves it, "b" hates it.
pub fn love_hate() -> (Vec<Comment>, FixedScorer) {
    (
        vec![
            comment("a", "I love this!", at(10, 0)),
            comment("b", "I hate this.", at(10, 5)),
        ],
        FixedScorer::new(&[("I love this!", 0.6), ("I hate this.", -0.6)]),
    )
}

pub fn state(source: Arc<StubSource>, scorer: FixedScorer) -> AppState {
    AppState {
        source,
        scorer: Arc::new(scorer),
    }
}
