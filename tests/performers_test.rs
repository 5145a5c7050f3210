use std::io::Write;

use festlist::FestlistError;
use festlist::lineup::SampleSize;
use festlist::lineup::performers::*;
use serde_json::json;

fn page_data(titles: &[&str]) -> Vec<u8> {
    let edges: Vec<_> = titles
        .iter()
        .map(|t| json!({ "node": { "title": { "rendered": t } } }))
        .collect();
    json!({ "result": { "data": { "allFestPerformers": { "edges": edges } } } })
        .to_string()
        .into_bytes()
}

#[test]
fn test_parse_page_data_reads_and_decodes_names() {
    let body = page_data(&["The Interrupters", "Mischief Brew &amp; Friends", "Anthrax"]);

    let lineup = parse_page_data(&body, SampleSize::new(3)).unwrap();

    assert_eq!(lineup.sample_size, SampleSize::new(3));
    assert_eq!(
        lineup.names,
        vec!["The Interrupters", "Mischief Brew & Friends", "Anthrax"]
    );
}

#[test]
fn test_parse_page_data_missing_edges_is_empty() {
    let body = json!({ "result": { "data": { "allFestPerformers": {} } } }).to_string();
    let lineup = parse_page_data(body.as_bytes(), SampleSize::new(3)).unwrap();
    assert!(lineup.names.is_empty());

    let body = json!({ "result": {} }).to_string();
    let lineup = parse_page_data(body.as_bytes(), SampleSize::new(3)).unwrap();
    assert!(lineup.names.is_empty());

    let body = json!({}).to_string();
    let lineup = parse_page_data(body.as_bytes(), SampleSize::new(3)).unwrap();
    assert!(lineup.names.is_empty());
}

#[test]
fn test_parse_page_data_unexpected_shape_is_empty() {
    let body = json!({ "result": { "data": { "allFestPerformers": { "edges": "soon" } } } })
        .to_string();

    let lineup = parse_page_data(body.as_bytes(), SampleSize::new(3)).unwrap();
    assert!(lineup.names.is_empty());
}

#[test]
fn test_parse_page_data_skips_edges_without_title() {
    let body = json!({
        "result": { "data": { "allFestPerformers": { "edges": [
            { "node": { "title": { "rendered": "Hot Water Music" } } },
            { "node": {} },
            {},
            { "node": { "title": { "rendered": "Less Than Jake" } } }
        ] } } }
    })
    .to_string();

    let lineup = parse_page_data(body.as_bytes(), SampleSize::new(2)).unwrap();
    assert_eq!(lineup.names, vec!["Hot Water Music", "Less Than Jake"]);
}

#[test]
fn test_parse_page_data_rejects_non_json() {
    let result = parse_page_data(b"<html>maintenance</html>", SampleSize::new(3));
    assert!(matches!(result, Err(FestlistError::Json(_))));
}

#[test]
fn test_parse_config() {
    let lineup = parse_config(
        r#"{ "track_sample_size": 2, "artist_names": ["The Interrupters", "AJJ &amp; Co"] }"#,
    )
    .unwrap();

    assert_eq!(lineup.sample_size, SampleSize::new(2));
    // file names are used as written
    assert_eq!(lineup.names, vec!["The Interrupters", "AJJ &amp; Co"]);
}

#[test]
fn test_parse_config_rejects_negative_sample_size() {
    let result = parse_config(r#"{ "track_sample_size": -2, "artist_names": [] }"#);
    assert!(matches!(result, Err(FestlistError::InvalidSampleSize(-2))));
}

#[tokio::test]
async fn test_config_file_source_matches_feed_shape() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "track_sample_size": 3, "artist_names": ["Hot Water Music"] }}"#
    )
    .unwrap();

    let source = PerformerSource::ConfigFile(file.path().to_path_buf());
    let lineup = source.read(&reqwest::Client::new()).await.unwrap();

    assert_eq!(lineup.sample_size, SampleSize::new(3));
    assert_eq!(lineup.names, vec!["Hot Water Music"]);
}

#[tokio::test]
async fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = PerformerSource::ConfigFile(dir.path().join("missing.json"));

    let result = source.read(&reqwest::Client::new()).await;
    assert!(matches!(result, Err(FestlistError::Io(_))));
}

#[test]
fn test_parse_page_data_skips_malformed_edge_and_keeps_the_rest() {
    let body = json!({
        "result": { "data": { "allFestPerformers": { "edges": [
            { "node": { "title": { "rendered": "Hot Water Music" } } },
            { "node": { "title": "Less Than Jake" } },
            { "node": { "title": { "rendered": "The Interrupters" } } }
        ] } } }
    })
    .to_string();

    let lineup = parse_page_data(body.as_bytes(), SampleSize::new(3)).unwrap();
    assert_eq!(lineup.names, vec!["Hot Water Music", "The Interrupters"]);
}
