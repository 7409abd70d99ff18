//! Core data model: one record per tweet.

use serde::{Deserialize, Serialize};

/// Identifier of a tweet, canonicalized from the `Idx` field of the input.
///
/// `Idx` may be any JSON scalar; it is stored as its string rendering so that
/// `1`, `"a7"` and `3.5` are all valid (and distinct) ids. Identity — never
/// array position — is what selection and rendering match on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TweetId(pub String);

impl std::fmt::Display for TweetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TweetId {
    fn from(s: &str) -> Self {
        TweetId(s.to_string())
    }
}

/// One tweet with its scores and simulation coordinates.
///
/// `x`/`y` start at the origin and are written exclusively by
/// [`run_layout`](crate::layout::run_layout); everything downstream
/// (canvas, export) reads them without mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetPoint {
    pub id: TweetId,
    pub month: i32,
    /// Expected in [-1, 1]; not enforced by the loader.
    pub sentiment: f64,
    /// Expected in [0, 1]; not enforced by the loader.
    pub subjectivity: f64,
    pub raw_text: String,
    pub x: f64,
    pub y: f64,
}

impl TweetPoint {
    /// Short month name ("Jan".."Dec") when `month` is a calendar month,
    /// otherwise `None` (the source data is not validated against 1..=12).
    pub fn month_label(&self) -> Option<&'static str> {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
            .map(|m| &m.name()[..3])
    }
}
