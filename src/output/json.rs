// JSON rendering of the same reports the terminal shows.

use anyhow::{Context, Result};
use serde::Serialize;

use super::Leaderboard;
use crate::analysis::kudos::ScoreBreakdown;

#[derive(Serialize)]
struct LeaderboardsReport<'a> {
    ranked: &'a Leaderboard,
    h_index: &'a Leaderboard,
}

#[derive(Serialize)]
struct BreakdownReport<'a> {
    handle: &'a str,
    #[serde(flatten)]
    breakdown: &'a ScoreBreakdown,
}

/// Both leaderboards as one JSON document.
pub fn leaderboards(ranked: &Leaderboard, h_index: &Leaderboard) -> Result<String> {
    serde_json::to_string_pretty(&LeaderboardsReport { ranked, h_index })
        .context("Failed to serialize leaderboards")
}

/// A single user's breakdown as JSON.
pub fn breakdown(handle: &str, breakdown: &ScoreBreakdown) -> Result<String> {
    serde_json::to_string_pretty(&BreakdownReport { handle, breakdown })
        .context("Failed to serialize score breakdown")
}
