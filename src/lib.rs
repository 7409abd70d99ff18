//! Sentiplot crate root: re-exports and module wiring.
//!
//! An interactive tweet-sentiment dashboard built on egui/eframe: load a
//! JSON file of per-tweet sentiment/subjectivity scores, lay the tweets out
//! as non-overlapping dots with a small force simulation, color them by a
//! selectable metric, click dots to build an ordered selection.
//!
//! Module map:
//! - `data`: tweet records, JSON loader, selection store, export writers
//! - `layout`: the force relaxation that positions the dots
//! - `color_scale`: the two metric color ramps
//! - `config`: canvas and window configuration
//! - `app`: the `DashboardApp` frame loop and `run_dashboard` entry points
//! - `panels`: the "Selected" side panel

pub mod app;
pub mod color_scale;
pub mod config;
pub mod data;
pub mod layout;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_dashboard, run_dashboard_with_tweets, DashboardApp};
pub use color_scale::{ColorMetric, ColorScale, SENTIMENT_SCALE, SUBJECTIVITY_SCALE};
pub use config::{CanvasConfig, DashboardConfig};
pub use data::{load_tweets_from_path, parse_tweets, LoadError, Selection, TweetId, TweetPoint};
pub use layout::{run_layout, LayoutParams};
