// Kudos — the per-user interaction accumulator and its scoring formulas.
//
// One `Kudos` exists per user seen in a run: every author, plus every user
// credited with an interaction. Each interaction category is its own sparse
// collection, keyed by the user's own post (or by the interacting user for
// mentions), and stays `None` until the first event of that category arrives.
// "Never interacted" and "interacted zero times" are therefore distinct, and
// every sub-score treats `None` as 0.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// One quote of a post: who quoted it, and with which post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRef {
    pub quoter: String,
    pub quoting_post_id: String,
}

/// One reply received from a given user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyRef {
    /// `None` for replies that name the user but not a specific post.
    pub original_post_id: Option<String>,
    pub reply_post_id: String,
}

/// Replying user -> reply post ids.
pub type RepliesByUser = HashMap<String, Vec<String>>;

/// Everything other users did to one user's posts during a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kudos {
    /// own post id -> times favourited
    favourites: Option<HashMap<String, u32>>,
    /// own post id -> retweeting users, in arrival order
    retweets: Option<HashMap<String, Vec<String>>>,
    /// own post id -> quotes of it
    quotes: Option<HashMap<String, Vec<QuoteRef>>>,
    /// mentioning user -> mentioning post ids
    mentions: Option<HashMap<String, Vec<String>>>,
    /// own post id -> replying user -> reply post ids
    replies_to: Option<HashMap<Option<String>, RepliesByUser>>,
    /// replying user -> (own post id, reply post id); same events as `replies_to`
    replies_from: Option<HashMap<String, Vec<ReplyRef>>>,
}

/// The scoring inputs and outputs for one user, for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub favourites_score: f64,
    pub quotes_score: f64,
    pub retweets_score: f64,
    pub mentions_score: f64,
    pub replies_score: f64,
    pub rank: f64,
    pub h_index: usize,
    pub favourite_count: u64,
    pub quote_count: usize,
    pub retweet_count: usize,
    pub mention_count: usize,
    pub reply_count: usize,
}

impl Kudos {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first interaction of any kind is recorded.
    pub fn is_empty(&self) -> bool {
        self.favourites.is_none()
            && self.retweets.is_none()
            && self.quotes.is_none()
            && self.mentions.is_none()
            && self.replies_to.is_none()
            && self.replies_from.is_none()
    }

    // ---- mutators ----------------------------------------------------

    pub fn add_favourite(&mut self, post_id: &str) {
        *self
            .favourites
            .get_or_insert_with(HashMap::new)
            .entry(post_id.to_string())
            .or_insert(0) += 1;
    }

    pub fn add_quote(&mut self, quoter: &str, quoted_post_id: &str, quoting_post_id: &str) {
        self.quotes
            .get_or_insert_with(HashMap::new)
            .entry(quoted_post_id.to_string())
            .or_default()
            .push(QuoteRef {
                quoter: quoter.to_string(),
                quoting_post_id: quoting_post_id.to_string(),
            });
    }

    pub fn add_retweet(&mut self, retweeter: &str, post_id: &str) {
        self.retweets
            .get_or_insert_with(HashMap::new)
            .entry(post_id.to_string())
            .or_default()
            .push(retweeter.to_string());
    }

    pub fn add_mention(&mut self, mentioner: &str, post_id: &str) {
        self.mentions
            .get_or_insert_with(HashMap::new)
            .entry(mentioner.to_string())
            .or_default()
            .push(post_id.to_string());
    }

    pub fn add_reply(
        &mut self,
        replying_user: &str,
        original_post_id: Option<&str>,
        reply_post_id: &str,
    ) {
        self.replies_to
            .get_or_insert_with(HashMap::new)
            .entry(original_post_id.map(str::to_string))
            .or_default()
            .entry(replying_user.to_string())
            .or_default()
            .push(reply_post_id.to_string());

        self.replies_from
            .get_or_insert_with(HashMap::new)
            .entry(replying_user.to_string())
            .or_default()
            .push(ReplyRef {
                original_post_id: original_post_id.map(str::to_string),
                reply_post_id: reply_post_id.to_string(),
            });
    }

    // ---- read access -------------------------------------------------

    pub fn favourites(&self) -> Option<&HashMap<String, u32>> {
        self.favourites.as_ref()
    }

    pub fn retweets(&self) -> Option<&HashMap<String, Vec<String>>> {
        self.retweets.as_ref()
    }

    pub fn quotes(&self) -> Option<&HashMap<String, Vec<QuoteRef>>> {
        self.quotes.as_ref()
    }

    pub fn mentions(&self) -> Option<&HashMap<String, Vec<String>>> {
        self.mentions.as_ref()
    }

    pub fn replies_to(&self) -> Option<&HashMap<Option<String>, RepliesByUser>> {
        self.replies_to.as_ref()
    }

    pub fn replies_from(&self) -> Option<&HashMap<String, Vec<ReplyRef>>> {
        self.replies_from.as_ref()
    }

    // ---- scoring -----------------------------------------------------

    /// Composite influence score: the sum of the five sub-scores.
    pub fn rank(&self) -> f64 {
        self.favourites_score()
            + self.quotes_score()
            + self.retweets_score()
            + self.mentions_score()
            + self.replies_score()
    }

    /// Mean favourites per favourited post.
    pub fn favourites_score(&self) -> f64 {
        let Some(favourites) = &self.favourites else {
            return 0.0;
        };
        let total: u64 = favourites.values().map(|&c| u64::from(c)).sum();
        ratio(total as f64, favourites.len())
    }

    /// Distinct retweeters across all posts, per retweeted post.
    pub fn retweets_score(&self) -> f64 {
        let Some(retweets) = &self.retweets else {
            return 0.0;
        };
        let unique_retweeters: HashSet<&str> = retweets
            .values()
            .flat_map(|users| users.iter().map(String::as_str))
            .collect();
        ratio(unique_retweeters.len() as f64, retweets.len())
    }

    /// Distinct quoters (counted per quoted post) over total quote events.
    /// 1.0 means nobody quoted the same post twice.
    pub fn quotes_score(&self) -> f64 {
        let Some(quotes) = &self.quotes else {
            return 0.0;
        };
        let mut quoters_count = 0usize;
        let mut quotes_count = 0usize;
        for quoted_by in quotes.values() {
            let distinct: HashSet<&str> = quoted_by.iter().map(|q| q.quoter.as_str()).collect();
            quoters_count += distinct.len();
            quotes_count += quoted_by.len();
        }
        ratio(quoters_count as f64, quotes_count)
    }

    /// Mean mentions per mentioning user.
    pub fn mentions_score(&self) -> f64 {
        let Some(mentions) = &self.mentions else {
            return 0.0;
        };
        let total: usize = mentions.values().map(Vec::len).sum();
        ratio(total as f64, mentions.len())
    }

    /// Replies are tracked but carry no weight in the rank yet.
    pub fn replies_score(&self) -> f64 {
        0.0
    }

    /// Largest h such that h of this user's posts were each retweeted at
    /// least h times. Repeat retweets by the same user count.
    pub fn h_index(&self) -> usize {
        let Some(retweets) = &self.retweets else {
            return 0;
        };
        let mut counts: Vec<usize> = retweets.values().map(Vec::len).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let mut h_index = 0;
        for count in counts {
            if count < h_index + 1 {
                break;
            }
            h_index += 1;
        }
        h_index
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            favourites_score: self.favourites_score(),
            quotes_score: self.quotes_score(),
            retweets_score: self.retweets_score(),
            mentions_score: self.mentions_score(),
            replies_score: self.replies_score(),
            rank: self.rank(),
            h_index: self.h_index(),
            favourite_count: self
                .favourites
                .as_ref()
                .map_or(0, |f| f.values().map(|&c| u64::from(c)).sum()),
            quote_count: self
                .quotes
                .as_ref()
                .map_or(0, |q| q.values().map(Vec::len).sum()),
            retweet_count: self
                .retweets
                .as_ref()
                .map_or(0, |r| r.values().map(Vec::len).sum()),
            mention_count: self
                .mentions
                .as_ref()
                .map_or(0, |m| m.values().map(Vec::len).sum()),
            reply_count: self
                .replies_from
                .as_ref()
                .map_or(0, |r| r.values().map(Vec::len).sum()),
        }
    }
}

/// Division that yields 0.0 for an empty denominator.
fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_and_scores_zero() {
        let k = Kudos::new();
        assert!(k.is_empty());
        assert_eq!(k.rank(), 0.0);
        assert_eq!(k.h_index(), 0);
        assert!(k.favourites().is_none());
    }

    #[test]
    fn test_favourites_counted_not_listed() {
        let mut k = Kudos::new();
        k.add_favourite("1");
        k.add_favourite("1");
        assert_eq!(k.favourites().unwrap().get("1"), Some(&2));
        assert!((k.favourites_score() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_reply_indexed_both_ways() {
        let mut k = Kudos::new();
        k.add_reply("bob", Some("10"), "11");
        let to = k.replies_to().unwrap();
        assert_eq!(to[&Some("10".to_string())]["bob"], vec!["11".to_string()]);
        let from = k.replies_from().unwrap();
        assert_eq!(from["bob"][0].reply_post_id, "11");
        assert!(k.mentions().is_none());
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(5.0, 0), 0.0);
    }
}
