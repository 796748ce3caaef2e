// Raw archive shapes — serde mirrors of the Twitter v1.1 tweet JSON.
//
// Every field is optional here because the archive is only loosely
// structured. `RawTweet::into_record` is the single place where required
// fields are checked; a missing one is a fatal error naming the field.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::record::{InReplyTo, Mention, PostRecord, UserRef};

/// A tweet as it appears in the archive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTweet {
    pub id_str: Option<String>,
    pub text: Option<String>,
    /// Extended-mode tweets carry their body here instead of `text`.
    pub full_text: Option<String>,
    pub user: Option<RawUser>,
    pub favorited: Option<RawFlag>,
    pub quoted_status: Option<Box<RawTweet>>,
    pub retweeted_status: Option<Box<RawTweet>>,
    pub in_reply_to_user_id_str: Option<String>,
    pub in_reply_to_status_id_str: Option<String>,
    pub entities: Option<RawEntities>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    pub id_str: Option<String>,
    pub screen_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntities {
    #[serde(default)]
    pub user_mentions: Vec<RawMention>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMention {
    pub id_str: Option<String>,
    pub screen_name: Option<String>,
    pub name: Option<String>,
}

/// The `favorited` flag. The API emits a boolean, some exporters a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
}

impl RawFlag {
    pub fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Text(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => anyhow::bail!("missing required field `{field}`"),
    }
}

impl RawUser {
    fn into_user_ref(self) -> Result<UserRef> {
        Ok(UserRef {
            id: required(self.id_str, "user.id_str")?,
            handle: required(self.screen_name, "user.screen_name")?,
            name: self.name,
        })
    }
}

impl RawMention {
    fn into_mention(self) -> Result<Mention> {
        Ok(Mention {
            user_id: required(self.id_str, "id_str")?,
            handle: required(self.screen_name, "screen_name")?,
            name: self.name,
        })
    }
}

impl RawTweet {
    /// Validate and convert into a typed record, recursing into embedded
    /// quoted and retweeted posts.
    pub fn into_record(self) -> Result<PostRecord> {
        let id = required(self.id_str, "id_str")?;

        // Everything after the id is reported against it.
        let build = || -> Result<PostRecord> {
            let user = match self.user {
                Some(user) => user.into_user_ref()?,
                None => anyhow::bail!("missing required field `user`"),
            };
            let text = match (self.text, self.full_text) {
                (Some(text), _) | (None, Some(text)) => text,
                (None, None) => anyhow::bail!("missing required field `text`"),
            };

            let quoted = self
                .quoted_status
                .map(|q| (*q).into_record().context("in quoted_status"))
                .transpose()?
                .map(Box::new);
            let retweeted = self
                .retweeted_status
                .map(|r| (*r).into_record().context("in retweeted_status"))
                .transpose()?
                .map(Box::new);

            let in_reply_to = self.in_reply_to_user_id_str.map(|user_id| InReplyTo {
                user_id,
                post_id: self.in_reply_to_status_id_str,
            });

            let mentions = self
                .entities
                .map(|e| e.user_mentions)
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(i, m)| {
                    m.into_mention()
                        .with_context(|| format!("in entities.user_mentions[{i}]"))
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(PostRecord {
                id: id.clone(),
                author: user,
                text,
                favourited: self.favorited.is_some_and(|f| f.is_set()),
                quoted,
                retweeted,
                in_reply_to,
                mentions,
            })
        };

        build().with_context(|| format!("malformed tweet {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<PostRecord> {
        let raw: RawTweet = serde_json::from_str(json).unwrap();
        raw.into_record()
    }

    #[test]
    fn test_minimal_tweet() {
        let post = parse(
            r#"{"id_str": "1", "text": "hello", "user": {"id_str": "10", "screen_name": "alice"}}"#,
        )
        .unwrap();
        assert_eq!(post.id, "1");
        assert_eq!(post.author.handle, "alice");
        assert!(!post.favourited);
        assert!(post.mentions.is_empty());
        assert!(post.in_reply_to.is_none());
    }

    #[test]
    fn test_favorited_string_and_bool() {
        let a = parse(
            r#"{"id_str": "1", "text": "x", "favorited": "true", "user": {"id_str": "10", "screen_name": "a"}}"#,
        )
        .unwrap();
        let b = parse(
            r#"{"id_str": "2", "text": "x", "favorited": true, "user": {"id_str": "10", "screen_name": "a"}}"#,
        )
        .unwrap();
        let c = parse(
            r#"{"id_str": "3", "text": "x", "favorited": false, "user": {"id_str": "10", "screen_name": "a"}}"#,
        )
        .unwrap();
        assert!(a.favourited);
        assert!(b.favourited);
        assert!(!c.favourited);
    }

    #[test]
    fn test_full_text_fallback() {
        let post = parse(
            r#"{"id_str": "1", "full_text": "long body", "user": {"id_str": "10", "screen_name": "a"}}"#,
        )
        .unwrap();
        assert_eq!(post.text, "long body");
    }

    #[test]
    fn test_missing_id_is_fatal() {
        let err = parse(r#"{"text": "x", "user": {"id_str": "10", "screen_name": "a"}}"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("id_str"));
    }

    #[test]
    fn test_missing_author_names_tweet() {
        let err = parse(r#"{"id_str": "42", "text": "x"}"#).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("42"), "{msg}");
        assert!(msg.contains("`user`"), "{msg}");
    }

    #[test]
    fn test_malformed_embedded_quote_is_fatal() {
        let err = parse(
            r#"{"id_str": "2", "text": "x", "user": {"id_str": "10", "screen_name": "a"},
                "quoted_status": {"id_str": "1", "text": "y", "user": {"id_str": "11"}}}"#,
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("quoted_status"), "{msg}");
        assert!(msg.contains("screen_name"), "{msg}");
    }

    #[test]
    fn test_reply_without_status_id() {
        let post = parse(
            r#"{"id_str": "1", "text": "@b hi", "in_reply_to_user_id_str": "20",
                "user": {"id_str": "10", "screen_name": "a"},
                "entities": {"user_mentions": [{"id_str": "20", "screen_name": "b"}]}}"#,
        )
        .unwrap();
        let reply = post.in_reply_to.unwrap();
        assert_eq!(reply.user_id, "20");
        assert!(reply.post_id.is_none());
        assert_eq!(post.mentions.len(), 1);
    }
}
