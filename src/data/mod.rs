pub mod export;
pub mod loader;
pub mod selection;
pub mod tweet;

pub use loader::{load_tweets_from_path, parse_tweets, LoadError, LoadResult};
pub use selection::Selection;
pub use tweet::{TweetId, TweetPoint};
