use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned post identifier.
///
/// Opaque to the client; the only invariant is that it is stable across
/// requests. Accepts both string and integer ids on the wire (json-server
/// hands out integers, other backends use strings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(id) => PostId(id),
            Raw::Number(id) => PostId(id.to_string()),
        })
    }
}

/// The sole domain entity: a blog-style record.
///
/// Copies are transient. The client never keeps a canonical collection in
/// memory; every render re-fetches from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Payload for creating a post. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }

    /// Presence check; the only validation the client performs.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.author.trim().is_empty()
            && !self.content.trim().is_empty()
    }
}

/// Payload for updating a post. The author is not editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
}
