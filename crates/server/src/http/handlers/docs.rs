use axum::{response::Redirect, Json};
use domain::{MAX_LIMIT, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

pub async fn index() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": "Community sentiment API",
        "routes": [
            {
                "method": "GET",
                "path": "/analyse/{community_name}",
                "summary": "Scores the sentiment of the most recent comments of a subreddit.",
                "query": {
                    "limit": format!("integer, 0..={}, default {}", MAX_LIMIT, MAX_LIMIT),
                    "start_time": "YYYY-MM-DD HH:MM (UTC), requires end_time",
                    "end_time": "YYYY-MM-DD HH:MM (UTC), requires start_time",
                    "filter_by": "positive | negative | neutral, case-insensitive"
                },
                "response": [
                    { "id": "string", "text": "string", "polarity": "number", "sentiment": "string" }
                ],
                "sentiment": {
                    "positive": format!("polarity >= {}", POSITIVE_THRESHOLD),
                    "negative": format!("polarity <= {}", NEGATIVE_THRESHOLD),
                    "neutral": "otherwise"
                },
                "errors": {
                    "404": "no comments found, before or after filtering",
                    "422": "invalid parameters",
                    "500": "sentiment scoring failed",
                    "502": "forum API error, including unknown or private communities"
                }
            }
        ]
    }))
}
