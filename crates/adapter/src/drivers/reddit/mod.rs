mod auth;
mod client;
mod listing;

pub use client::{RedditClient, RedditConfig};
