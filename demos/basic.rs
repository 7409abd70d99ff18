//! Example: Open the dashboard pre-loaded with the bundled sample data
//!
//! What it demonstrates
//! - Loading a tweet file with `load_tweets_from_path`.
//! - Launching the full dashboard with `run_dashboard_with_tweets`.
//!
//! How to run
//! ```bash
//! cargo run --example basic
//! ```
//! You should see ten dots clustered around the canvas center; click some to
//! build a selection, then switch the metric to Subjectivity.

use std::path::Path;

use sentiplot::{load_tweets_from_path, run_dashboard_with_tweets, DashboardConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/testdata/sample_tweets.json"
    ));
    let tweets = match load_tweets_from_path(path) {
        Ok(tweets) => tweets,
        Err(e) => {
            eprintln!("could not load sample data: {e}");
            std::process::exit(1);
        }
    };

    run_dashboard_with_tweets(DashboardConfig::default(), tweets)
}
