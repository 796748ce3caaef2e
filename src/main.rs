use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use kudos::analysis::pipeline::{self, Analysis, AnalysisOptions};
use kudos::config::Config;
use kudos::output::terminal::{self, ScoreFormat};
use kudos::output::{json, Leaderboard};
use kudos::twitter::archive::{JsonArchive, PostSource};

/// Kudos: influence ranking for Twitter archives.
///
/// Reads a batch of tweets and ranks the users whose posts others
/// favourited, quoted, retweeted, mentioned, and replied to.
#[derive(Parser)]
#[command(name = "kudos", version, about)]
struct Cli {
    /// Log every classified interaction (FAVE, QUOTE, RETWEET, REPLY, MENTION)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank users by composite score and by retweet h-index
    #[command(alias = "analyze")]
    Analyse {
        /// Tweet archive (JSON array, JSON Lines, or account download)
        archive: Option<PathBuf>,

        /// Number of users per leaderboard (default: 20)
        #[arg(long)]
        top: Option<usize>,

        /// Print the leaderboards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the score breakdown for one user
    Inspect {
        /// The handle to inspect (leading @ optional)
        handle: String,

        /// Tweet archive to analyse
        archive: Option<PathBuf>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count the interactions in an archive without ranking
    Summary {
        /// Tweet archive to analyse
        archive: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let env_config = Config::load()?;

    // Set up structured logging; debug mode raises the default level so the
    // per-interaction lines are visible.
    let default_filter = if cli.debug || env_config.debug {
        "kudos=debug"
    } else {
        "kudos=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Analyse {
            archive,
            top,
            json: as_json,
        } => {
            let config = env_config.with_overrides(archive, cli.debug, top)?;
            let analysis = run_analysis(&config)?;

            let ranked = Leaderboard::by_rank(&analysis.kudos, config.top_n);
            let h_index = Leaderboard::by_h_index(&analysis.kudos, config.top_n);

            if as_json {
                println!("{}", json::leaderboards(&ranked, &h_index)?);
            } else {
                println!(
                    "Detected {} different Twitter users",
                    analysis.kudos.len()
                );
                terminal::display_leaderboard(&ranked, ScoreFormat::Decimal);
                terminal::display_leaderboard(&h_index, ScoreFormat::Integer);
                println!("\n{}", "Done.".bold());
            }
        }

        Commands::Inspect {
            handle,
            archive,
            json: as_json,
        } => {
            let config = env_config.with_overrides(archive, cli.debug, None)?;
            let analysis = run_analysis(&config)?;

            let handle = handle.strip_prefix('@').unwrap_or(&handle);
            let Some(user_kudos) = analysis.kudos.get(handle) else {
                anyhow::bail!(
                    "@{handle} does not appear in this archive ({} users do)",
                    analysis.kudos.len()
                );
            };

            let breakdown = user_kudos.breakdown();
            if as_json {
                println!("{}", json::breakdown(handle, &breakdown)?);
            } else {
                terminal::display_breakdown(handle, &breakdown);
            }
        }

        Commands::Summary { archive } => {
            let config = env_config.with_overrides(archive, cli.debug, None)?;
            let analysis = run_analysis(&config)?;
            terminal::display_summary(
                &analysis.stats,
                analysis.kudos.len(),
                analysis.lookup.len(),
            );
        }
    }

    Ok(())
}

/// Load the configured archive and run both analysis passes over it.
fn run_analysis(config: &Config) -> Result<Analysis> {
    let path = config.require_archive()?;
    info!(path = %path.display(), "Loading archive");

    let posts = JsonArchive::new(path).posts()?;
    let options = AnalysisOptions {
        debug: config.debug,
    };
    Ok(pipeline::analyse(&posts, &options))
}
