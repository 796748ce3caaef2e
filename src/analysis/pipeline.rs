// Analysis pipeline: posts -> classification -> per-user Kudos.
//
// Two passes over the batch:
// 1. Index every post (and every embedded original) by id.
// 2. Give every author an accumulator, classify each post, and credit the
//    users it interacts with.
//
// The user -> Kudos map belongs to a single run. `analyse` always starts from
// an empty map; `analyse_into` accumulates into the caller's map, so running
// it twice over the same posts counts every interaction twice.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use super::classify::{self, MentionKind};
use super::kudos::Kudos;
use super::lookup::PostLookupTable;
use crate::output::safe_preview;
use crate::twitter::record::PostRecord;

/// User handle -> accumulated interactions.
pub type KudosMap = HashMap<String, Kudos>;

#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Log every classified interaction at debug level.
    pub debug: bool,
}

/// How many interactions of each kind a run recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub posts: usize,
    pub favourites: usize,
    pub quotes: usize,
    pub retweets: usize,
    pub replies: usize,
    pub mentions: usize,
    /// Mentions dropped because the post was a retweet.
    pub suppressed_mentions: usize,
}

/// Result of one run.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub kudos: KudosMap,
    pub lookup: PostLookupTable,
    pub stats: AnalysisStats,
}

/// Analyse a batch of posts with a fresh set of accumulators.
pub fn analyse(posts: &[PostRecord], options: &AnalysisOptions) -> Analysis {
    let mut kudos = KudosMap::new();
    let (lookup, stats) = analyse_into(&mut kudos, posts, options);
    Analysis {
        kudos,
        lookup,
        stats,
    }
}

/// Analyse a batch of posts, crediting interactions into an existing map.
pub fn analyse_into(
    kudos: &mut KudosMap,
    posts: &[PostRecord],
    options: &AnalysisOptions,
) -> (PostLookupTable, AnalysisStats) {
    info!(posts = posts.len(), "Analysing posts");

    let lookup = PostLookupTable::build(posts);

    let mut dispatcher = Dispatcher {
        kudos: &mut *kudos,
        debug: options.debug,
        stats: AnalysisStats {
            posts: posts.len(),
            ..AnalysisStats::default()
        },
    };
    for post in posts {
        dispatcher.dispatch(post);
    }
    let stats = dispatcher.stats;

    info!(
        users = kudos.len(),
        indexed_posts = lookup.len(),
        "Detected different users"
    );

    (lookup, stats)
}

/// Credits each interaction of a post to the right user.
struct Dispatcher<'a> {
    kudos: &'a mut KudosMap,
    debug: bool,
    stats: AnalysisStats,
}

impl Dispatcher<'_> {
    fn kudos_for(&mut self, handle: &str) -> &mut Kudos {
        self.kudos.entry(handle.to_string()).or_default()
    }

    fn dispatch(&mut self, post: &PostRecord) {
        let author = post.author.handle.as_str();
        // Authors are tracked even when nobody interacted with them.
        self.kudos_for(author);

        if classify::is_favourited(post) {
            self.kudos_for(author).add_favourite(&post.id);
            self.stats.favourites += 1;
            self.event("FAVE", author, author, post);
        }

        if let Some(quoted) = &post.quoted {
            let quoted_user = quoted.author.handle.as_str();
            self.kudos_for(quoted_user)
                .add_quote(author, &quoted.id, &post.id);
            self.stats.quotes += 1;
            self.event("QUOTE", quoted_user, author, post);
        }

        if let Some(retweeted) = &post.retweeted {
            let retweeted_user = retweeted.author.handle.as_str();
            self.kudos_for(retweeted_user)
                .add_retweet(author, &retweeted.id);
            self.stats.retweets += 1;
            self.event("RETWEET", retweeted_user, author, post);
        }

        if !classify::has_mentions(post) {
            return;
        }
        for mention in &post.mentions {
            let mentioned = mention.handle.as_str();
            match classify::classify_mention(post, mention) {
                MentionKind::Reply => {
                    let original_post_id =
                        post.in_reply_to.as_ref().and_then(|r| r.post_id.as_deref());
                    self.kudos_for(mentioned)
                        .add_reply(author, original_post_id, &post.id);
                    self.stats.replies += 1;
                    self.event("REPLY", mentioned, author, post);
                }
                MentionKind::Mention => {
                    self.kudos_for(mentioned).add_mention(author, &post.id);
                    self.stats.mentions += 1;
                    self.event("MENTION", mentioned, author, post);
                }
                MentionKind::Suppressed => {
                    self.stats.suppressed_mentions += 1;
                }
            }
        }
    }

    fn event(&self, kind: &str, target: &str, actor: &str, post: &PostRecord) {
        if !self.debug {
            return;
        }
        debug!(
            kind,
            target_user = target,
            acting_user = actor,
            post_id = post.id.as_str(),
            "{}",
            safe_preview(&post.text, 80)
        );
    }
}
