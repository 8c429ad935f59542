// Live feed: scheduled tick task with snapshot-on-read

pub mod config;
mod snapshot;
mod task;

pub use config::FeedConfig;
pub use snapshot::{FeedSnapshot, FeedSummary, FeedUpdate};
pub use task::{FeedReader, LiveFeed};
