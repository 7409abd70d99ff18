use sentiplot::data::export::{save_tweets_json, write_tweets_csv, write_tweets_json};
use sentiplot::data::loader::{load_tweets_from_path, parse_tweets};
use sentiplot::data::tweet::{TweetId, TweetPoint};

fn tweet(id: &str, text: &str) -> TweetPoint {
    TweetPoint {
        id: TweetId::from(id),
        month: 4,
        sentiment: -0.5,
        subjectivity: 0.75,
        raw_text: text.to_string(),
        x: 100.0,
        y: 200.0,
    }
}

#[test]
fn csv_has_header_and_one_row_per_tweet() {
    let a = tweet("1", "plain text");
    let b = tweet("2", "more text");
    let mut buf = Vec::new();
    write_tweets_csv(&mut buf, &[&a, &b]).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines[0], "id,month,sentiment,subjectivity,raw_text");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,4,-0.5,0.75,"));
}

#[test]
fn csv_quotes_awkward_tweet_text() {
    let t = tweet("q", "commas, \"quotes\" and\nnewlines");
    let mut buf = Vec::new();
    write_tweets_csv(&mut buf, &[&t]).unwrap();
    let s = String::from_utf8(buf).unwrap();
    // The csv crate doubles quotes and wraps the field.
    assert!(s.contains("\"commas, \"\"quotes\"\" and\nnewlines\""));
}

#[test]
fn json_export_round_trips_through_the_loader() {
    let a = tweet("a7", "first");
    let b = tweet("8", "second");
    let mut buf = Vec::new();
    write_tweets_json(&mut buf, &[&a, &b]).unwrap();

    let reloaded = parse_tweets(&buf).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].id, a.id);
    assert_eq!(reloaded[0].raw_text, "first");
    assert_eq!(reloaded[0].sentiment, -0.5);
    assert_eq!(reloaded[1].id, b.id);
    // Positions are not exported; reloaded points start at the origin.
    assert_eq!((reloaded[0].x, reloaded[0].y), (0.0, 0.0));
}

#[test]
fn json_export_uses_the_input_field_names() {
    let t = tweet("1", "x");
    let mut buf = Vec::new();
    write_tweets_json(&mut buf, &[&t]).unwrap();
    let s = String::from_utf8(buf).unwrap();
    for field in ["\"Idx\"", "\"Month\"", "\"Sentiment\"", "\"Subjectivity\"", "\"RawTweet\""] {
        assert!(s.contains(field), "missing {field} in {s}");
    }
}

#[test]
fn save_writes_a_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");
    let t = tweet("1", "saved");
    save_tweets_json(&path, &[&t]).unwrap();
    let reloaded = load_tweets_from_path(&path).unwrap();
    assert_eq!(reloaded[0].raw_text, "saved");
}
