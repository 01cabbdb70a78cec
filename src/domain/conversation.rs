use serde::{Deserialize, Serialize};

use crate::domain::EntityId;
use crate::infra::store::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: EntityId,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread_count: u32,
    pub online: bool,
}

impl Record for Conversation {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    Sent,
    Received,
}

impl MessageOrigin {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: EntityId,
    pub text: String,
    /// Wall-clock display string, e.g. "10:32 AM".
    pub timestamp: String,
    pub origin: MessageOrigin,
}

impl Record for Message {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
