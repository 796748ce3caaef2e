// Archive loading — the data source that feeds the analysis.
//
// Accepts the shapes tweets are commonly dumped in:
// - a JSON array of tweet objects
// - an object with a top-level "tweets" array
// - JSON Lines (one tweet object per line)
// - the account-download form `window.YTD.tweets.part0 = [{"tweet": {...}}, ...]`
//
// Every record is validated into a `PostRecord` up front. One malformed
// record fails the whole load; skipping it would skew every count.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::{debug, info};

use super::raw::RawTweet;
use super::record::PostRecord;

/// Anything that can produce the batch of posts to analyse.
pub trait PostSource {
    fn posts(&self) -> Result<Vec<PostRecord>>;
}

/// A tweet dump on disk.
pub struct JsonArchive {
    path: PathBuf,
}

impl JsonArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for JsonArchive {
    fn posts(&self) -> Result<Vec<PostRecord>> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read archive {}", self.path.display()))?;

        let posts = parse_archive(&contents)
            .with_context(|| format!("Failed to load archive {}", self.path.display()))?;

        info!(
            path = %self.path.display(),
            count = posts.len(),
            "Loaded posts from archive"
        );
        Ok(posts)
    }
}

/// Parse archive text in any of the supported layouts.
pub fn parse_archive(contents: &str) -> Result<Vec<PostRecord>> {
    let body = strip_js_assignment(contents.trim_start());

    let values: Vec<Value> = if body.starts_with('[') {
        serde_json::from_str(body).context("Archive is not a valid JSON array")?
    } else {
        let mut values = Vec::new();
        for (i, value) in serde_json::Deserializer::from_str(body)
            .into_iter::<Value>()
            .enumerate()
        {
            values.push(value.with_context(|| format!("Invalid JSON in record {i}"))?);
        }
        unwrap_envelope(values)?
    };

    debug!(records = values.len(), "Parsed archive JSON");

    let pb = validation_progress(values.len(), std::io::stderr().is_terminal());
    let mut posts = Vec::with_capacity(values.len());
    for (i, value) in values.into_iter().enumerate() {
        posts.push(record_from_value(value).with_context(|| format!("Record {i}"))?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(posts)
}

/// Progress bar for the validation pass, whatever the layout. Hidden when
/// stderr is not a terminal so piped output stays clean.
fn validation_progress(len: usize, on_terminal: bool) -> ProgressBar {
    if !on_terminal {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Validating [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

/// Convert one archive value, unwrapping the `{"tweet": {...}}` wrapper used
/// by account downloads.
fn record_from_value(value: Value) -> Result<PostRecord> {
    let value = match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key("tweet") => {
            map.remove("tweet").unwrap_or(Value::Null)
        }
        other => other,
    };
    let raw: RawTweet =
        serde_json::from_value(value).context("Record does not have the shape of a tweet")?;
    raw.into_record()
}

/// A single object holding a "tweets" array is an envelope; anything else is
/// a stream of tweets.
fn unwrap_envelope(mut values: Vec<Value>) -> Result<Vec<Value>> {
    if values.len() != 1 {
        return Ok(values);
    }
    let is_envelope = values[0].get("tweets").is_some_and(Value::is_array);
    if !is_envelope {
        return Ok(values);
    }
    match values.pop().and_then(|v| v.get("tweets").cloned()) {
        Some(Value::Array(tweets)) => Ok(tweets),
        _ => anyhow::bail!("Archive \"tweets\" field is not an array"),
    }
}

/// Drop a leading `window.YTD.<name> = ` so the remainder is plain JSON.
fn strip_js_assignment(body: &str) -> &str {
    if body.starts_with("window.") {
        if let Some(pos) = body.find('=') {
            return body[pos + 1..].trim_start();
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWEET: &str =
        r#"{"id_str": "1", "text": "hi", "user": {"id_str": "10", "screen_name": "alice"}}"#;

    #[test]
    fn test_strip_js_assignment() {
        assert_eq!(strip_js_assignment("window.YTD.tweets.part0 = [1]"), "[1]");
        assert_eq!(strip_js_assignment("[1]"), "[1]");
    }

    #[test]
    fn test_array_layout() {
        let posts = parse_archive(&format!("[{TWEET}]")).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author.handle, "alice");
    }

    #[test]
    fn test_envelope_layout() {
        let posts = parse_archive(&format!(r#"{{"tweets": [{TWEET}, {TWEET}]}}"#)).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_single_line_jsonl_is_one_tweet() {
        let posts = parse_archive(TWEET).unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_account_download_layout() {
        let body = format!("window.YTD.tweets.part0 = [{{\"tweet\": {TWEET}}}]");
        let posts = parse_archive(&body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "1");
    }

    #[test]
    fn test_validation_progress_hidden_off_terminal() {
        assert!(validation_progress(10, false).is_hidden());
        assert_eq!(validation_progress(10, true).length(), Some(10));
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_archive("[]").unwrap().is_empty());
        assert!(parse_archive("").unwrap().is_empty());
    }
}
