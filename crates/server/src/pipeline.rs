//! fetch → time window → score → sentiment filter → response shape.

use adapter::{CommentSource, SentimentScorer};
use domain::{
    filter_by_sentiment, AnalysedComment, AnalysisError, AnnotatedComment, AnnotationError,
    Comment, CommunityName, TimeWindow, UpstreamError,
};
use tracing::{error, info};

use crate::state::AppState;

/// A validated `/analyse` request.
#[derive(Debug, Clone)]
pub struct AnalyseRequest {
    pub community: CommunityName,
    pub limit: u32,
    pub window: Option<TimeWindow>,
    pub filter_by: Option<String>,
}

pub async fn fetch_comments(
    source: &dyn CommentSource,
    community: &CommunityName,
    limit: u32,
    window: Option<&TimeWindow>,
) -> Result<Vec<Comment>, UpstreamError> {
    info!("Fetching recent comments from {}...", community);
    if limit == 0 {
        // Reddit reads 0 as "use the default page size".
        info!("Fetched 0 comment(s) from {}", community);
        return Ok(Vec::new());
    }

    let mut comments = source
        .recent_comments(community, limit)
        .await
        .map_err(|e| {
            error!("Failed to fetch comments from {}: {}", community, e);
            e
        })?;
    comments.truncate(limit as usize);

    let comments = match window {
        Some(w) => {
            let kept = w.apply(comments);
            info!(
                "Fetched {} comment(s) from {} between {} and {}",
                kept.len(),
                community,
                w.start,
                w.end
            );
            kept
        }
        None => {
            info!("Fetched {} comment(s) from {}", comments.len(), community);
            comments
        }
    };

    Ok(comments)
}

/// All-or-nothing: one scorer failure fails the batch.
pub fn annotate(
    scorer: &dyn SentimentScorer,
    comments: Vec<Comment>,
) -> Result<Vec<AnnotatedComment>, AnnotationError> {
    info!("Analysing sentiments of {} comment(s)...", comments.len());

    let annotated = comments
        .into_iter()
        .map(|comment| {
            let score = scorer
                .score(&comment.text)
                .map_err(|e| AnnotationError::Scorer {
                    id: comment.id.clone(),
                    reason: e.to_string(),
                })?;
            if !score.is_finite() {
                return Err(AnnotationError::Scorer {
                    id: comment.id.clone(),
                    reason: format!("score is not a number: {}", score),
                });
            }
            Ok(AnnotatedComment::new(comment, score))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Failed to analyse sentiments: {}", e);
            e
        })?;

    info!("Sentiments analysed.");
    Ok(annotated)
}

pub async fn analyse(
    state: &AppState,
    req: AnalyseRequest,
) -> Result<Vec<AnalysedComment>, AnalysisError> {
    let comments = fetch_comments(
        state.source.as_ref(),
        &req.community,
        req.limit,
        req.window.as_ref(),
    )
    .await?;

    if comments.is_empty() {
        return Err(AnalysisError::EmptyResult(format!(
            "No comments found in {} for the requested range",
            req.community
        )));
    }

    let annotated = annotate(state.scorer.as_ref(), comments)?;

    let annotated = match req.filter_by.as_deref() {
        Some(label) => {
            let kept = filter_by_sentiment(annotated, Some(label));
            info!("{} comment(s) left after filtering by '{}'", kept.len(), label);
            if kept.is_empty() {
                return Err(AnalysisError::EmptyResult(format!(
                    "No comments in {} match sentiment '{}'",
                    req.community, label
                )));
            }
            kept
        }
        None => annotated,
    };

    Ok(annotated.into_iter().map(AnalysedComment::from).collect())
}
