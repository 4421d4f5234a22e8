mod drivers;
mod lexicon;
mod traits;

pub use drivers::reddit::{RedditClient, RedditConfig};
pub use lexicon::LexiconScorer;
pub use traits::{CommentSource, SentimentScorer};
