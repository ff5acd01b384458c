//! YouTube Data API (video platform) adapter

pub mod client;

pub use client::{video_client, YoutubeClient, YoutubeCredentials};
