use serde::{Deserialize, Serialize};

use crate::domain::EntityId;
use crate::infra::store::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            avatar: avatar.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub author: Author,
    pub content: String,
    /// Relative display string ("2 hours ago", "just now").
    pub timestamp: String,
    pub like_count: u32,
    pub comment_count: u32,
    pub share_count: u32,
    pub liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub const JUST_NOW: &str = "just now";

impl Post {
    /// A freshly composed post: zero counters, not liked, no image.
    pub fn composed(id: EntityId, author: Author, content: impl Into<String>) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            timestamp: JUST_NOW.to_string(),
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            liked: false,
            image: None,
        }
    }

    pub fn has_media(&self) -> bool {
        self.image.is_some()
    }
}

impl Record for Post {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
