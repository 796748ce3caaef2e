// Unit tests for post classification.
//
// Each predicate is independent; one post can match several at once.

use kudos::analysis::classify::{
    classify_mention, has_mentions, is_a_quote, is_a_retweet, is_favourited, MentionKind,
};
use kudos::twitter::record::PostRecord;

fn original() -> PostRecord {
    PostRecord::new("1", "10", "alice", "original")
}

#[test]
fn overlapping_categories() {
    let post = PostRecord::new("2", "11", "bob", "quote and retweet @carol")
        .favourited()
        .quoting(original())
        .retweeting(original())
        .mentioning("12", "carol");
    assert!(is_favourited(&post));
    assert!(is_a_quote(&post));
    assert!(is_a_retweet(&post));
    assert!(has_mentions(&post));
}

#[test]
fn mention_of_reply_target_is_a_reply() {
    let post = PostRecord::new("2", "11", "bob", "@alice @carol")
        .replying_to("10", Some("1"))
        .mentioning("10", "alice")
        .mentioning("12", "carol");
    assert_eq!(classify_mention(&post, &post.mentions[0]), MentionKind::Reply);
    assert_eq!(classify_mention(&post, &post.mentions[1]), MentionKind::Mention);
}

#[test]
fn mention_in_retweet_is_suppressed() {
    let post = PostRecord::new("2", "11", "bob", "RT @alice: original")
        .retweeting(original())
        .mentioning("10", "alice");
    assert_eq!(
        classify_mention(&post, &post.mentions[0]),
        MentionKind::Suppressed
    );
}

#[test]
fn mention_in_quote_is_not_suppressed() {
    let post = PostRecord::new("2", "11", "bob", "look @alice")
        .quoting(original())
        .mentioning("10", "alice");
    assert_eq!(classify_mention(&post, &post.mentions[0]), MentionKind::Mention);
}

#[test]
fn post_without_reply_linkage_only_mentions() {
    let post = PostRecord::new("2", "11", "bob", "hi @alice").mentioning("10", "alice");
    assert_eq!(classify_mention(&post, &post.mentions[0]), MentionKind::Mention);
}
