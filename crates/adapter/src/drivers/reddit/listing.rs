use chrono::{DateTime, Utc};
use domain::{Comment, UpstreamError};
use serde::Deserialize;

// --- Reddit wire types ---

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
pub struct Thing {
    pub kind: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct RawComment {
    pub id: String,
    #[serde(default)]
    pub body: String,
    pub created_utc: f64,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
}

const COMMENT_KIND: &str = "t1";

impl RawComment {
    pub fn into_comment(self) -> Result<Comment, UpstreamError> {
        let secs = self.created_utc.trunc() as i64;
        let nanos = (self.created_utc.fract() * 1e9) as u32;
        let created_at = DateTime::<Utc>::from_timestamp(secs, nanos).ok_or_else(|| {
            UpstreamError::InvalidResponse(format!(
                "comment {} has an out of range created_utc: {}",
                self.id, self.created_utc
            ))
        })?;

        Ok(Comment {
            id: self.id,
            text: self.body,
            created_at,
        })
    }
}

impl Listing {
    /// Comments in listing order; other kinds of things are skipped.
    pub fn into_comments(self) -> Result<Vec<Comment>, UpstreamError> {
        self.data
            .children
            .into_iter()
            .filter(|thing| thing.kind == COMMENT_KIND)
            .map(|thing| {
                serde_json::from_value::<RawComment>(thing.data)
                    .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?
                    .into_comment()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_to_comments() {
        let body = serde_json::json!({
            "kind": "Listing",
            "data": {
                "after": "t1_c3",
                "children": [
                    { "kind": "t1", "data": { "id": "c1", "body": "I love this!", "created_utc": 1695913200.0 } },
                    { "kind": "more", "data": { "count": 3 } },
                    { "kind": "t1", "data": { "id": "c2", "body": "", "created_utc": 1695913500.5 } }
                ]
            }
        });
        let listing: Listing = serde_json::from_value(body).unwrap();
        let comments = listing.into_comments().unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, "c1");
        assert_eq!(comments[0].text, "I love this!");
        assert_eq!(comments[0].created_at.timestamp(), 1695913200);
        assert_eq!(comments[1].id, "c2");
        assert_eq!(comments[1].text, "");
        assert_eq!(comments[1].created_at.timestamp_millis(), 1695913500500);
    }

    #[test]
    fn test_missing_fields_are_invalid() {
        let body = serde_json::json!({
            "data": { "children": [ { "kind": "t1", "data": { "body": "no id" } } ] }
        });
        let listing: Listing = serde_json::from_value(body).unwrap();
        assert!(matches!(
            listing.into_comments(),
            Err(UpstreamError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_listing() {
        let listing: Listing = serde_json::from_value(serde_json::json!({ "data": {} })).unwrap();
        assert!(listing.into_comments().unwrap().is_empty());
    }
}
