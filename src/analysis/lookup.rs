// Post lookup table — every post seen in a run, indexed by id.
//
// Embedded quoted and retweeted posts are indexed too, so a post that only
// ever appears inside another one is still resolvable. Built in the first
// pass and read-only afterwards. Scoring does not consult it.

use std::collections::HashMap;

use crate::twitter::record::PostRecord;

#[derive(Debug, Clone, Default)]
pub struct PostLookupTable {
    posts: HashMap<String, PostRecord>,
}

impl PostLookupTable {
    /// Index every post and its embedded originals. For a repeated id the
    /// later copy wins; embedded copies of one post are expected to agree.
    pub fn build(posts: &[PostRecord]) -> Self {
        let mut table = Self::default();
        for post in posts {
            table.insert(post);
        }
        table
    }

    fn insert(&mut self, post: &PostRecord) {
        self.posts.insert(post.id.clone(), post.clone());
        if let Some(quoted) = &post.quoted {
            self.posts.insert(quoted.id.clone(), (**quoted).clone());
        }
        if let Some(retweeted) = &post.retweeted {
            self.posts.insert(retweeted.id.clone(), (**retweeted).clone());
        }
    }

    pub fn get(&self, post_id: &str) -> Option<&PostRecord> {
        self.posts.get(post_id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
