use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sentiment::Sentiment;

/// A subreddit name, checked before it is spliced into an upstream URL.
/// Several communities can be joined with `+` (`rust+python`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityName(String);

impl CommunityName {
    pub fn new(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if s.is_empty() {
            return Err("Community name must not be empty.".to_string());
        }
        for segment in s.split('+') {
            if segment.is_empty() {
                return Err(format!("Community name '{}' has an empty segment.", s));
            }
            if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(
                    "Community name may only contain letters, digits, underscores and '+'."
                        .to_string(),
                );
            }
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommunityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r/{}", self.0)
    }
}

/// A comment as fetched from the forum, normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A comment together with its sentiment score. The raw comment is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedComment {
    pub comment: Comment,
    pub compound_score: f64,
    pub sentiment: Sentiment,
}

impl AnnotatedComment {
    pub fn new(comment: Comment, compound_score: f64) -> Self {
        Self {
            comment,
            compound_score,
            sentiment: Sentiment::classify(compound_score),
        }
    }
}

/// Wire shape returned by `/analyse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysedComment {
    pub id: String,
    pub text: String,
    pub polarity: f64,
    pub sentiment: String,
}

impl From<AnnotatedComment> for AnalysedComment {
    fn from(a: AnnotatedComment) -> Self {
        AnalysedComment {
            id: a.comment.id,
            text: a.comment.text,
            polarity: a.compound_score,
            sentiment: a.sentiment.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_community_name_rules() {
        assert!(CommunityName::new("rust").is_ok());
        assert!(CommunityName::new("Ask_Science42").is_ok());
        assert!(CommunityName::new("x").is_ok());
        assert!(CommunityName::new("rust+python").is_ok());
        assert!(CommunityName::new("").is_err());
        assert!(CommunityName::new("rust+").is_err());
        assert!(CommunityName::new("+rust").is_err());
        assert!(CommunityName::new("rust?limit=100").is_err());
        assert!(CommunityName::new("rust/../admin").is_err());
        assert!(CommunityName::new("with space").is_err());
        assert!(CommunityName::new("dash-name").is_err());
    }

    #[test]
    fn test_community_name_display() {
        let name = CommunityName::new("rust").unwrap();
        assert_eq!(name.to_string(), "r/rust");
        assert_eq!(name.as_str(), "rust");
    }

    #[test]
    fn test_projection_keeps_id_and_text() {
        let comment = Comment {
            id: "abc".to_string(),
            text: "I love this!".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 9, 28, 15, 0, 0).unwrap(),
        };
        let annotated = AnnotatedComment::new(comment, 0.6);
        assert_eq!(annotated.sentiment, Sentiment::Positive);

        let out = AnalysedComment::from(annotated);
        assert_eq!(out.id, "abc");
        assert_eq!(out.text, "I love this!");
        assert_eq!(out.polarity, 0.6);
        assert_eq!(out.sentiment, "positive");
    }

    #[test]
    fn test_analysed_comment_json_shape() {
        let out = AnalysedComment {
            id: "x".to_string(),
            text: "".to_string(),
            polarity: 0.0,
            sentiment: "neutral".to_string(),
        };
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "id": "x", "text": "", "polarity": 0.0, "sentiment": "neutral" })
        );
    }
}
