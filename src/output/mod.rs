// Output — leaderboards, text cleanup, and the terminal/JSON renderers.

pub mod json;
pub mod terminal;

use std::cmp::Ordering;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::analysis::kudos::Kudos;
use crate::analysis::pipeline::KudosMap;

/// Default number of users on each leaderboard.
pub const DEFAULT_TOP_N: usize = 20;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Fold text to plain ASCII: compatibility-decompose (so "é" becomes "e" plus
/// a combining accent), then drop everything outside ASCII.
pub fn ascii_fold(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// ASCII-folded, single-line, truncated text for log lines.
pub fn safe_preview(text: &str, max_chars: usize) -> String {
    let folded = ascii_fold(text);
    let single_line = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&single_line, max_chars)
}

/// One row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub handle: String,
    pub score: f64,
}

/// Users ordered by one score, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub title: String,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Top `n` users by composite rank.
    pub fn by_rank(kudos: &KudosMap, n: usize) -> Self {
        Self::build("Ranked", kudos, n, Kudos::rank)
    }

    /// Top `n` users by retweet h-index.
    pub fn by_h_index(kudos: &KudosMap, n: usize) -> Self {
        Self::build("H-Index", kudos, n, |k| k.h_index() as f64)
    }

    fn build(title: &str, kudos: &KudosMap, n: usize, score: impl Fn(&Kudos) -> f64) -> Self {
        let mut entries: Vec<LeaderboardEntry> = kudos
            .iter()
            .map(|(handle, k)| LeaderboardEntry {
                handle: handle.clone(),
                score: score(k),
            })
            .collect();

        // Score descending; handle ascending on ties so output is stable.
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.handle.cmp(&b.handle))
        });
        entries.truncate(n);

        Self {
            title: title.to_string(),
            entries,
        }
    }
}
