// Typed post records — the only shape of a tweet the analysis ever sees.

use serde::Serialize;

/// A user as referenced from a post: the stable numeric id plus the handle.
///
/// Accumulators are keyed by `handle`; reply detection compares `id`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: String,
    pub handle: String,
    pub name: Option<String>,
}

/// A user mentioned in a post's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    pub user_id: String,
    pub handle: String,
    pub name: Option<String>,
}

/// The in-reply-to linkage of a post.
///
/// Old-style "@user" replies carry a user id without a status id, so the
/// post id is optional even when the user id is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InReplyTo {
    pub user_id: String,
    pub post_id: Option<String>,
}

/// A single post, validated at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: String,
    pub author: UserRef,
    pub text: String,
    pub favourited: bool,
    /// The post this one quotes, as embedded in the archive.
    pub quoted: Option<Box<PostRecord>>,
    /// The post this one re-shares, as embedded in the archive.
    pub retweeted: Option<Box<PostRecord>>,
    pub in_reply_to: Option<InReplyTo>,
    pub mentions: Vec<Mention>,
}

impl PostRecord {
    /// Minimal record with no interactions. Mostly useful for building
    /// fixtures; archive loading goes through `raw::RawTweet`.
    pub fn new(id: &str, author_id: &str, author_handle: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            author: UserRef {
                id: author_id.to_string(),
                handle: author_handle.to_string(),
                name: None,
            },
            text: text.to_string(),
            favourited: false,
            quoted: None,
            retweeted: None,
            in_reply_to: None,
            mentions: Vec::new(),
        }
    }

    pub fn favourited(mut self) -> Self {
        self.favourited = true;
        self
    }

    pub fn quoting(mut self, original: PostRecord) -> Self {
        self.quoted = Some(Box::new(original));
        self
    }

    pub fn retweeting(mut self, original: PostRecord) -> Self {
        self.retweeted = Some(Box::new(original));
        self
    }

    pub fn replying_to(mut self, user_id: &str, post_id: Option<&str>) -> Self {
        self.in_reply_to = Some(InReplyTo {
            user_id: user_id.to_string(),
            post_id: post_id.map(str::to_string),
        });
        self
    }

    pub fn mentioning(mut self, user_id: &str, handle: &str) -> Self {
        self.mentions.push(Mention {
            user_id: user_id.to_string(),
            handle: handle.to_string(),
            name: None,
        });
        self
    }
}
