use crate::models::AnnotatedComment;
use crate::sentiment::Sentiment;

/// Keeps the comments whose label matches `label` (case-insensitive).
///
/// No label, or an empty one, returns the input as is. A label that is not
/// one of `positive`/`negative`/`neutral` matches nothing.
pub fn filter_by_sentiment(
    comments: Vec<AnnotatedComment>,
    label: Option<&str>,
) -> Vec<AnnotatedComment> {
    let label = match label {
        None | Some("") => return comments,
        Some(l) => l,
    };

    match label.parse::<Sentiment>() {
        Ok(wanted) => comments
            .into_iter()
            .filter(|c| c.sentiment == wanted)
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comment;
    use chrono::{TimeZone, Utc};

    fn annotated(id: &str, score: f64) -> AnnotatedComment {
        AnnotatedComment::new(
            Comment {
                id: id.to_string(),
                text: format!("text {}", id),
                created_at: Utc.with_ymd_and_hms(2023, 9, 28, 12, 0, 0).unwrap(),
            },
            score,
        )
    }

    fn sample() -> Vec<AnnotatedComment> {
        vec![
            annotated("p1", 0.8),
            annotated("n1", -0.5),
            annotated("z1", 0.1),
            annotated("p2", 0.3),
            annotated("n2", -0.3),
        ]
    }

    fn ids(comments: &[AnnotatedComment]) -> Vec<&str> {
        comments.iter().map(|c| c.comment.id.as_str()).collect()
    }

    #[test]
    fn test_none_is_identity() {
        let input = sample();
        let out = filter_by_sentiment(input.clone(), None);
        assert_eq!(out, input);
    }

    #[test]
    fn test_empty_label_is_identity() {
        let input = sample();
        assert_eq!(filter_by_sentiment(input.clone(), Some("")), input);
    }

    #[test]
    fn test_positive_keeps_relative_order() {
        let out = filter_by_sentiment(sample(), Some("positive"));
        assert_eq!(ids(&out), vec!["p1", "p2"]);
        assert!(out.iter().all(|c| c.sentiment == Sentiment::Positive));
    }

    #[test]
    fn test_label_match_ignores_case() {
        assert_eq!(ids(&filter_by_sentiment(sample(), Some("NEGATIVE"))), vec!["n1", "n2"]);
        assert_eq!(ids(&filter_by_sentiment(sample(), Some("Neutral"))), vec!["z1"]);
    }

    #[test]
    fn test_unknown_label_yields_nothing() {
        assert!(filter_by_sentiment(sample(), Some("angry")).is_empty());
        assert!(filter_by_sentiment(sample(), Some(" positive")).is_empty());
    }
}
