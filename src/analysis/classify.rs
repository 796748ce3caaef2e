// Post classification — which interactions a single post represents.
//
// The categories overlap: one post can be favourited, quote another post,
// retweet a third, and mention several users all at once. Each predicate
// answers one question independently.

use crate::twitter::record::{Mention, PostRecord};

pub fn is_favourited(post: &PostRecord) -> bool {
    post.favourited
}

pub fn is_a_quote(post: &PostRecord) -> bool {
    post.quoted.is_some()
}

pub fn is_a_retweet(post: &PostRecord) -> bool {
    post.retweeted.is_some()
}

pub fn has_mentions(post: &PostRecord) -> bool {
    !post.mentions.is_empty()
}

/// How a single entry in a post's mention list is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    /// The mentioned user is the one being replied to.
    Reply,
    /// A plain mention of someone other than the reply target.
    Mention,
    /// Dropped: the post is a retweet, so the retweeted author is already credited.
    Suppressed,
}

/// Classify one mention of `post`.
///
/// A reply is detected by the mention's user id matching the post's
/// in-reply-to user id. That check runs first, so a reply inside a retweet
/// is still a reply.
pub fn classify_mention(post: &PostRecord, mention: &Mention) -> MentionKind {
    let is_reply_target = post
        .in_reply_to
        .as_ref()
        .is_some_and(|r| r.user_id == mention.user_id);

    if is_reply_target {
        MentionKind::Reply
    } else if is_a_retweet(post) {
        MentionKind::Suppressed
    } else {
        MentionKind::Mention
    }
}
