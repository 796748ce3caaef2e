// Coloured terminal output for leaderboards and per-user breakdowns.
//
// main.rs delegates all human-readable formatting here.

use colored::Colorize;

use super::Leaderboard;
use crate::analysis::kudos::ScoreBreakdown;
use crate::analysis::pipeline::AnalysisStats;

/// How a leaderboard's scores are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFormat {
    /// Four decimal places (composite rank).
    Decimal,
    /// Whole numbers (h-index).
    Integer,
}

/// Display one leaderboard.
pub fn display_leaderboard(board: &Leaderboard, format: ScoreFormat) {
    println!(
        "\n{}",
        format!("=== {} (top {}) ===", board.title, board.entries.len()).bold()
    );

    if board.entries.is_empty() {
        println!("  {}", "No interactions found.".dimmed());
        return;
    }

    for (i, entry) in board.entries.iter().enumerate() {
        let score = match format {
            ScoreFormat::Decimal => format!("{:>9.4}", entry.score),
            ScoreFormat::Integer => format!("{:>9}", entry.score as u64),
        };
        let rank = format!("{:>4}.", i + 1);
        let rank = if i < 3 { rank.bold() } else { rank.dimmed() };
        println!("  {} {} : @{}", rank, score.cyan(), entry.handle);
    }
}

/// Display the full score breakdown for one user.
pub fn display_breakdown(handle: &str, breakdown: &ScoreBreakdown) {
    println!("\n{}", format!("=== Kudos for @{handle} ===").bold());
    println!("  Rank:     {:.4}", breakdown.rank);
    println!("  H-index:  {}", breakdown.h_index);

    println!("\n  Sub-scores:");
    println!(
        "    Favourites: {:.4}  ({} favourites)",
        breakdown.favourites_score, breakdown.favourite_count
    );
    println!(
        "    Quotes:     {:.4}  ({} quotes)",
        breakdown.quotes_score, breakdown.quote_count
    );
    println!(
        "    Retweets:   {:.4}  ({} retweets)",
        breakdown.retweets_score, breakdown.retweet_count
    );
    println!(
        "    Mentions:   {:.4}  ({} mentions)",
        breakdown.mentions_score, breakdown.mention_count
    );
    println!(
        "    Replies:    {:.4}  ({} replies, {})",
        breakdown.replies_score,
        breakdown.reply_count,
        "not scored".dimmed()
    );
}

/// Display corpus statistics for a run.
pub fn display_summary(stats: &AnalysisStats, users: usize, indexed_posts: usize) {
    println!("\n{}", "=== Corpus Summary ===".bold());
    println!("  Posts:          {}", stats.posts);
    println!("  Indexed posts:  {} (including embedded originals)", indexed_posts);
    println!("  Users:          {} (authors and interaction targets)", users);
    println!();
    println!("  Favourites: {}", stats.favourites);
    println!("  Quotes:     {}", stats.quotes);
    println!("  Retweets:   {}", stats.retweets);
    println!("  Replies:    {}", stats.replies);
    println!("  Mentions:   {}", stats.mentions);
    if stats.suppressed_mentions > 0 {
        println!(
            "  {} {} mentions inside retweets not counted",
            "~".yellow(),
            stats.suppressed_mentions
        );
    }
}
