//! Reddit (social-content platform) adapter

pub mod client;

pub use client::{social_client, RedditClient, RedditCredentials};
