use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use domain::{AnalysedComment, AnalysisError, CommunityName, TimeWindow, MAX_LIMIT};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::pipeline::{self, AnalyseRequest};
use crate::state::AppState;

/// Raw query string. Everything is read as text so bad values get a JSON
/// `detail` instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyseQuery {
    pub limit: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub filter_by: Option<String>,
}

impl AnalyseQuery {
    pub fn into_request(self, community_name: &str) -> Result<AnalyseRequest, AnalysisError> {
        let community = CommunityName::new(community_name).map_err(AnalysisError::Validation)?;
        let limit = parse_limit(non_empty(self.limit))?;

        let window = match (non_empty(self.start_time), non_empty(self.end_time)) {
            (Some(start), Some(end)) => {
                Some(TimeWindow::parse(&start, &end).map_err(AnalysisError::Validation)?)
            }
            (None, None) => None,
            _ => {
                return Err(AnalysisError::Validation(
                    "start_time and end_time must be given together".to_string(),
                ))
            }
        };

        Ok(AnalyseRequest {
            community,
            limit,
            window,
            filter_by: non_empty(self.filter_by),
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn parse_limit(raw: Option<String>) -> Result<u32, AnalysisError> {
    let Some(raw) = raw else {
        return Ok(MAX_LIMIT);
    };
    let limit: u32 = raw.trim().parse().map_err(|_| {
        AnalysisError::Validation(format!("limit must be an integer, got '{}'", raw))
    })?;
    if limit > MAX_LIMIT {
        return Err(AnalysisError::Validation(format!(
            "limit must be between 0 and {}, got {}",
            MAX_LIMIT, limit
        )));
    }
    Ok(limit)
}

pub async fn analyse(
    State(state): State<AppState>,
    Path(community_name): Path<String>,
    query: Result<Query<AnalyseQuery>, QueryRejection>,
) -> Result<Json<Vec<AnalysedComment>>, ApiError> {
    let Query(query) = query.map_err(|e| AnalysisError::Validation(e.body_text()))?;
    let request = query.into_request(&community_name)?;

    let comments = pipeline::analyse(&state, request).await?;
    Ok(Json(comments))
}
