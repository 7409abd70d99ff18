use sentiplot::data::loader::{load_tweets_from_path, parse_tweets, LoadError};
use std::io::Write;

#[test]
fn parses_a_minimal_file() {
    let json = br#"[{"Idx":1,"Month":1,"Sentiment":-1,"Subjectivity":0.5,"RawTweet":"bad day"}]"#;
    let tweets = parse_tweets(json).unwrap();
    assert_eq!(tweets.len(), 1);
    let t = &tweets[0];
    assert_eq!(t.id.0, "1");
    assert_eq!(t.month, 1);
    assert_eq!(t.sentiment, -1.0);
    assert_eq!(t.subjectivity, 0.5);
    assert_eq!(t.raw_text, "bad day");
    assert_eq!((t.x, t.y), (0.0, 0.0), "points must start at the origin");
}

#[test]
fn coerces_numeric_strings() {
    let json = br#"[{"Idx":"a7","Month":" 3 ","Sentiment":"0.25","Subjectivity":"0.75","RawTweet":"ok"}]"#;
    let tweets = parse_tweets(json).unwrap();
    assert_eq!(tweets[0].month, 3);
    assert_eq!(tweets[0].sentiment, 0.25);
    assert_eq!(tweets[0].subjectivity, 0.75);
}

#[test]
fn accepts_any_scalar_idx_and_keeps_them_distinct() {
    let json = br#"[
        {"Idx":1,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"a"},
        {"Idx":"1x","Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"b"},
        {"Idx":3.5,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"c"},
        {"Idx":true,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"d"}
    ]"#;
    let tweets = parse_tweets(json).unwrap();
    let ids: Vec<&str> = tweets.iter().map(|t| t.id.0.as_str()).collect();
    assert_eq!(ids, ["1", "1x", "3.5", "true"]);
}

#[test]
fn fractional_month_truncates() {
    let json = br#"[{"Idx":1,"Month":2.9,"Sentiment":0,"Subjectivity":0,"RawTweet":"x"}]"#;
    assert_eq!(parse_tweets(json).unwrap()[0].month, 2);
}

#[test]
fn ignores_unknown_fields_and_file_coordinates() {
    let json = br#"[{"Idx":1,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"x","x":400,"y":300,"extra":"ignored"}]"#;
    let tweets = parse_tweets(json).unwrap();
    assert_eq!((tweets[0].x, tweets[0].y), (0.0, 0.0));
}

#[test]
fn rejects_invalid_json() {
    assert!(matches!(parse_tweets(b"not json at all"), Err(LoadError::Json(_))));
}

#[test]
fn rejects_a_bare_string() {
    // Valid JSON, wrong shape.
    let err = parse_tweets(br#""just a string""#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray { got: "a string" }));
}

#[test]
fn rejects_a_non_object_element() {
    let err = parse_tweets(br#"[42]"#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnObject { index: 0, .. }));
}

#[test]
fn rejects_missing_fields() {
    let err = parse_tweets(br#"[{"Idx":1,"Month":1,"Sentiment":0,"RawTweet":"x"}]"#).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingField { index: 0, field: "Subjectivity" }
    ));
}

#[test]
fn rejects_unparsable_numbers() {
    let err = parse_tweets(
        br#"[{"Idx":1,"Month":"abc","Sentiment":0,"Subjectivity":0,"RawTweet":"x"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::InvalidField { index: 0, field: "Month", .. }));
}

#[test]
fn rejects_non_finite_numbers() {
    // "NaN" parses as an f64 but is useless as a score.
    let err = parse_tweets(
        br#"[{"Idx":1,"Month":1,"Sentiment":"NaN","Subjectivity":0,"RawTweet":"x"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::InvalidField { field: "Sentiment", .. }));
}

#[test]
fn rejects_null_idx_and_non_string_tweet() {
    let err = parse_tweets(
        br#"[{"Idx":null,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"x"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::InvalidField { field: "Idx", .. }));

    let err = parse_tweets(
        br#"[{"Idx":1,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":17}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::InvalidField { field: "RawTweet", .. }));
}

#[test]
fn rejects_duplicate_ids() {
    let json = br#"[
        {"Idx":1,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"a"},
        {"Idx":"1","Month":2,"Sentiment":0,"Subjectivity":0,"RawTweet":"b"}
    ]"#;
    let err = parse_tweets(json).unwrap_err();
    assert!(matches!(err, LoadError::DuplicateId { index: 1, .. }));
}

#[test]
fn a_late_bad_element_rejects_the_whole_file() {
    let json = br#"[
        {"Idx":1,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"fine"},
        {"Idx":2,"Month":1,"Sentiment":0,"Subjectivity":0,"RawTweet":"fine"},
        {"Idx":3,"Month":"nope","Sentiment":0,"Subjectivity":0,"RawTweet":"bad"}
    ]"#;
    assert!(parse_tweets(json).is_err(), "load must be all-or-nothing");
}

#[test]
fn loads_the_bundled_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/sample_tweets.json");
    let tweets = load_tweets_from_path(std::path::Path::new(path)).unwrap();
    assert_eq!(tweets.len(), 10);
    assert!(tweets.iter().any(|t| t.id.0 == "a7"));
}

#[test]
fn path_loading_round_trips_through_a_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"Idx":9,"Month":6,"Sentiment":0.5,"Subjectivity":0.25,"RawTweet":"tmp"}]"#)
        .unwrap();
    let tweets = load_tweets_from_path(file.path()).unwrap();
    assert_eq!(tweets[0].id.0, "9");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_tweets_from_path(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
