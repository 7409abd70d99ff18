//! Export writers: dump tweets (usually the current selection) to CSV or
//! JSON. The JSON shape mirrors the input file, so an export can be loaded
//! straight back into the dashboard.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::tweet::TweetPoint;

/// JSON export record; field names mirror the loader's expected input.
#[derive(Serialize)]
struct ExportRecord<'a> {
    #[serde(rename = "Idx")]
    idx: &'a str,
    #[serde(rename = "Month")]
    month: i32,
    #[serde(rename = "Sentiment")]
    sentiment: f64,
    #[serde(rename = "Subjectivity")]
    subjectivity: f64,
    #[serde(rename = "RawTweet")]
    raw_tweet: &'a str,
}

impl<'a> From<&'a TweetPoint> for ExportRecord<'a> {
    fn from(p: &'a TweetPoint) -> Self {
        Self {
            idx: &p.id.0,
            month: p.month,
            sentiment: p.sentiment,
            subjectivity: p.subjectivity,
            raw_tweet: &p.raw_text,
        }
    }
}

/// Write tweets as CSV. Tweet text routinely contains commas, quotes and
/// newlines, so quoting is left to the `csv` writer.
pub fn write_tweets_csv<W: Write>(w: W, points: &[&TweetPoint]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["id", "month", "sentiment", "subjectivity", "raw_text"])?;
    for p in points {
        wtr.write_record(&[
            p.id.0.clone(),
            p.month.to_string(),
            p.sentiment.to_string(),
            p.subjectivity.to_string(),
            p.raw_text.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write tweets as a pretty-printed JSON array in the input file's shape.
pub fn write_tweets_json<W: Write>(w: W, points: &[&TweetPoint]) -> serde_json::Result<()> {
    let records: Vec<ExportRecord<'_>> = points.iter().map(|p| ExportRecord::from(*p)).collect();
    serde_json::to_writer_pretty(w, &records)
}

/// Create `path` and write the CSV export into it.
pub fn save_tweets_csv<P: AsRef<Path>>(path: P, points: &[&TweetPoint]) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_tweets_csv(file, points)
}

/// Create `path` and write the JSON export into it.
pub fn save_tweets_json<P: AsRef<Path>>(path: P, points: &[&TweetPoint]) -> serde_json::Result<()> {
    let file = std::fs::File::create(path).map_err(serde_json::Error::io)?;
    write_tweets_json(file, points)
}
