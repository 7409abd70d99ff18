//! JSON ingest: turn an uploaded file into a list of [`TweetPoint`]s.
//!
//! The input is a JSON array of objects with the fields `Idx`, `Month`,
//! `Sentiment`, `Subjectivity` and `RawTweet`. Numeric fields may arrive as
//! numbers or numeric strings and are coerced; `Idx` may be any JSON scalar.
//! Loading is all-or-nothing: any bad element rejects the whole file so the
//! caller can keep its previous data set untouched.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::tweet::{TweetId, TweetPoint};

/// Why a file could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON.
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value is something other than an array.
    #[error("expected a JSON array of tweet objects, got {got}")]
    NotAnArray { got: &'static str },

    /// An array element is not an object.
    #[error("element {index} is not an object (got {got})")]
    NotAnObject { index: usize, got: &'static str },

    /// A required field is absent.
    #[error("element {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A field is present but cannot be coerced to its expected type.
    #[error("element {index}: field `{field}` has unusable value {value}")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// Two elements share the same `Idx`.
    #[error("element {index}: duplicate id `{id}`")]
    DuplicateId { index: usize, id: String },
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Parse raw file bytes into tweet points.
///
/// Points come back with `x == y == 0.0`; run
/// [`run_layout`](crate::layout::run_layout) before drawing them.
pub fn parse_tweets(bytes: &[u8]) -> LoadResult<Vec<TweetPoint>> {
    let root: Value = serde_json::from_slice(bytes)?;
    let elements = root.as_array().ok_or(LoadError::NotAnArray {
        got: json_kind(&root),
    })?;

    let mut points = Vec::with_capacity(elements.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        let obj = element.as_object().ok_or(LoadError::NotAnObject {
            index,
            got: json_kind(element),
        })?;

        let id = scalar_field(obj, index, "Idx")?;
        if !seen.insert(id.clone()) {
            return Err(LoadError::DuplicateId { index, id });
        }

        let month = numeric_field(obj, index, "Month")?.trunc() as i32;
        let sentiment = numeric_field(obj, index, "Sentiment")?;
        let subjectivity = numeric_field(obj, index, "Subjectivity")?;
        let raw_text = string_field(obj, index, "RawTweet")?;

        points.push(TweetPoint {
            id: TweetId(id),
            month,
            sentiment,
            subjectivity,
            raw_text,
            x: 0.0,
            y: 0.0,
        });
    }

    Ok(points)
}

/// Read and parse a file from disk.
pub fn load_tweets_from_path(path: &Path) -> LoadResult<Vec<TweetPoint>> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tweets(&bytes)
}

/// Human-readable kind of a JSON value, for error messages.
fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn get_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> LoadResult<&'a Value> {
    obj.get(field)
        .ok_or(LoadError::MissingField { index, field })
}

/// `Idx`: any JSON scalar, canonicalized to its string rendering.
fn scalar_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> LoadResult<String> {
    let v = get_field(obj, index, field)?;
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(invalid(index, field, v)),
    }
}

/// `Month`/`Sentiment`/`Subjectivity`: a number, or a string that parses as
/// one. Anything else — including NaN/infinity and empty strings — is
/// rejected rather than silently coerced.
fn numeric_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> LoadResult<f64> {
    let v = get_field(obj, index, field)?;
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(invalid(index, field, v)),
    }
}

fn string_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> LoadResult<String> {
    let v = get_field(obj, index, field)?;
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(index, field, v))
}

fn invalid(index: usize, field: &'static str, v: &Value) -> LoadError {
    // Keep messages short even when the offending value is a whole tweet.
    let mut value = v.to_string();
    if value.chars().count() > 48 {
        value = value.chars().take(45).collect();
        value.push_str("...");
    }
    LoadError::InvalidField {
        index,
        field,
        value,
    }
}
