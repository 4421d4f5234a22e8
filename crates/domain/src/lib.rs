mod errors;
mod filter;
mod models;
mod sentiment;
pub mod window;

pub use errors::{AnalysisError, AnnotationError, UpstreamError};
pub use filter::filter_by_sentiment;
pub use models::{AnalysedComment, AnnotatedComment, Comment, CommunityName};
pub use sentiment::{Sentiment, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use window::TimeWindow;

/// Hard ceiling on how many comments one request may fetch.
pub const MAX_LIMIT: u32 = 25;
