// Archive loading tests — files on disk through to analysed Kudos.
//
// Uses temporary files; no network access.

use std::io::Write;

use kudos::analysis::pipeline::{analyse, AnalysisOptions};
use kudos::twitter::archive::{parse_archive, JsonArchive, PostSource};

fn write_archive(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const REPLY: &str = r#"{
    "id_str": "300",
    "text": "@alice agreed, cc @bob",
    "favorited": false,
    "user": {"id_str": "3", "screen_name": "carol", "name": "Carol"},
    "in_reply_to_user_id_str": "1",
    "in_reply_to_status_id_str": "100",
    "entities": {"user_mentions": [
        {"id_str": "1", "screen_name": "alice", "name": "Alice"},
        {"id_str": "2", "screen_name": "bob", "name": "Bob"}
    ]}
}"#;

const QUOTE: &str = r#"{
    "id_str": "200",
    "text": "so true",
    "user": {"id_str": "2", "screen_name": "bob"},
    "quoted_status": {
        "id_str": "100",
        "text": "original thoughts",
        "user": {"id_str": "1", "screen_name": "alice"}
    },
    "entities": {"user_mentions": []}
}"#;

// ============================================================
// Layouts
// ============================================================

#[test]
fn loads_json_array_file() {
    let file = write_archive(&format!("[{REPLY}, {QUOTE}]"));
    let posts = JsonArchive::new(file.path()).posts().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].mentions.len(), 2);
    assert_eq!(posts[0].author.name.as_deref(), Some("Carol"));
    assert_eq!(posts[1].quoted.as_ref().unwrap().author.handle, "alice");
}

#[test]
fn loads_json_lines_file() {
    let compact = |s: &str| {
        serde_json::to_string(&serde_json::from_str::<serde_json::Value>(s).unwrap()).unwrap()
    };
    let file = write_archive(&format!("{}\n\n{}\n", compact(REPLY), compact(QUOTE)));
    let posts = JsonArchive::new(file.path()).posts().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].id, "200");
}

#[test]
fn missing_file_is_an_error() {
    let err = JsonArchive::new("/nonexistent/tweets.json").posts().unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/tweets.json"));
}

// ============================================================
// Malformed records
// ============================================================

#[test]
fn malformed_record_fails_the_whole_load() {
    let bad = r#"{"id_str": "999", "text": "no author"}"#;
    let err = parse_archive(&format!("[{REPLY}, {bad}]")).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Record 1"), "{msg}");
    assert!(msg.contains("999"), "{msg}");
}

#[test]
fn malformed_mention_names_its_position() {
    let bad = r#"{"id_str": "5", "text": "@x", "user": {"id_str": "1", "screen_name": "a"},
                  "entities": {"user_mentions": [{"screen_name": "x"}]}}"#;
    let err = parse_archive(&format!("[{bad}]")).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("user_mentions[0]"), "{msg}");
}

#[test]
fn invalid_json_is_an_error() {
    assert!(parse_archive("[{\"id_str\": ").is_err());
}

// ============================================================
// End to end
// ============================================================

#[test]
fn archive_to_kudos() {
    let file = write_archive(&format!("[{REPLY}, {QUOTE}]"));
    let posts = JsonArchive::new(file.path()).posts().unwrap();
    let analysis = analyse(&posts, &AnalysisOptions::default());

    let alice = &analysis.kudos["alice"];
    assert!(alice.replies_from().is_some());
    assert!((alice.quotes_score() - 1.0).abs() < 1e-9);
    assert_eq!(analysis.kudos["bob"].mentions().unwrap()["carol"], vec!["300"]);
    assert_eq!(analysis.lookup.len(), 3);
}
