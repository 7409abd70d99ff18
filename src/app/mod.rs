//! Main application module for the dashboard.
//!
//! This module defines [`DashboardApp`] and its wiring.  It is split into
//! focused sub-modules so that each concern can be reasoned about
//! independently:
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame UI: menu bar, side panel, status strip, screenshot events |
//! | [`canvas`] | Painting the dots and click/hover hit-testing |
//! | [`run`]    | Top-level [`run_dashboard()`] entry point and icon loading |

mod canvas;
mod run;
mod update;

pub use run::{run_dashboard, run_dashboard_with_tweets};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{info, warn};

use crate::color_scale::ColorMetric;
use crate::config::DashboardConfig;
use crate::data::loader::{load_tweets_from_path, LoadError};
use crate::data::selection::Selection;
use crate::data::tweet::TweetPoint;
use crate::layout::run_layout;
use crate::panels::selection_ui::SelectionPanel;

/// Provenance of the currently loaded data set.
#[derive(Clone, Debug)]
pub struct LoadInfo {
    pub path: PathBuf,
    pub at: DateTime<Local>,
}

/// The dashboard: tweet list, selection, active metric, and the UI state
/// around them.
///
/// `DashboardApp` implements [`eframe::App`] for standalone use via
/// [`run_dashboard`]; a host application can instead construct one (e.g. with
/// [`with_tweets`](Self::with_tweets)) and call
/// [`update_ui`](Self::update_ui) from its own frame loop.
///
/// Update policy, driven by discrete user events only:
/// * a successful load replaces the tweet list wholesale and runs the layout
///   once;
/// * a failed load keeps the previous tweets and their positions and sets the
///   error banner;
/// * metric and selection changes never re-run the layout; colors and
///   outlines re-derive on the next paint.
pub struct DashboardApp {
    pub config: DashboardConfig,

    /// The loaded tweets, positions filled in by the layout engine.
    pub tweets: Vec<TweetPoint>,

    /// Ordered click-selection. Deliberately NOT cleared on reload; stale ids
    /// simply stop resolving.
    pub selection: Selection,

    /// Metric currently driving the dot colors.
    pub metric: ColorMetric,

    /// Message of the most recent failed load, shown in the menu bar until
    /// the next successful load.
    pub(crate) load_error: Option<String>,

    /// Where and when the current data set was loaded from.
    pub(crate) load_info: Option<LoadInfo>,

    /// One-line result of the last export/screenshot action.
    pub(crate) status: Option<String>,

    /// Screenshot destination awaiting the viewport event.
    pub(crate) pending_screenshot: Option<PathBuf>,

    pub(crate) selection_panel: SelectionPanel,
}

impl DashboardApp {
    /// Create an empty dashboard; data arrives through the File menu.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            tweets: Vec::new(),
            selection: Selection::default(),
            metric: ColorMetric::default(),
            load_error: None,
            load_info: None,
            status: None,
            pending_screenshot: None,
            selection_panel: SelectionPanel::default(),
        }
    }

    /// Create a dashboard pre-loaded with `tweets`; runs the layout
    /// immediately. Used for embedding and the examples.
    pub fn with_tweets(config: DashboardConfig, tweets: Vec<TweetPoint>) -> Self {
        let mut app = Self::new(config);
        app.replace_tweets(tweets);
        app
    }

    /// Replace the data set wholesale and lay it out. The selection is left
    /// alone on purpose; see [`Selection`].
    pub fn replace_tweets(&mut self, mut tweets: Vec<TweetPoint>) {
        run_layout(&mut tweets, &self.config.effective_layout());
        self.tweets = tweets;
        self.load_error = None;
    }

    /// Load a JSON file, all-or-nothing. On failure the previous tweets and
    /// their positions stay untouched and the error is shown inline.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        match load_tweets_from_path(path) {
            Ok(tweets) => {
                info!("loaded {} tweets from {}", tweets.len(), path.display());
                self.replace_tweets(tweets);
                self.load_info = Some(LoadInfo {
                    path: path.to_path_buf(),
                    at: Local::now(),
                });
                Ok(())
            }
            Err(err) => {
                warn!("rejected {}: {err}", path.display());
                self.load_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Drop the loaded data (not the selection, which resolves to nothing).
    pub fn clear_data(&mut self) {
        self.tweets.clear();
        self.load_info = None;
        self.load_error = None;
    }

    /// Look up a tweet by id.
    pub fn tweet(&self, id: &crate::data::tweet::TweetId) -> Option<&TweetPoint> {
        self.tweets.iter().find(|t| &t.id == id)
    }

    /// The selected tweets in selection order. Ids that no longer resolve
    /// against the loaded set (selected before a reload) are skipped.
    pub fn selected_tweets(&self) -> Vec<&TweetPoint> {
        self.selection
            .iter()
            .filter_map(|id| self.tweets.iter().find(|t| &t.id == id))
            .collect()
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}
