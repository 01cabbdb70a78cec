use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::app::is_blank;
use crate::domain::conversation::{Conversation, Message, MessageOrigin};
use crate::domain::EntityId;
use crate::infra::clock::{wall_time, Clock};
use crate::infra::ids::IdSource;
use crate::infra::store::EntityStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inbox {
    pub conversations: EntityStore<Conversation>,
    pub selected: Option<EntityId>,
    pub thread: EntityStore<Message>,
}

impl Inbox {
    /// Opens on the first conversation, if there is one.
    pub fn new(conversations: EntityStore<Conversation>, thread: EntityStore<Message>) -> Self {
        let selected = conversations.first().map(|c| c.id.clone());
        Self {
            conversations,
            selected,
            thread,
        }
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected
            .as_ref()
            .and_then(|id| self.conversations.find(id))
    }
}

/// Appends a sent message built from `draft` to the end of the thread.
///
/// A blank draft returns the thread unchanged.
pub fn append_message<I, C>(
    thread: &EntityStore<Message>,
    ids: &mut I,
    clock: &C,
    draft: &str,
) -> Result<EntityStore<Message>>
where
    I: IdSource + ?Sized,
    C: Clock + ?Sized,
{
    if is_blank(draft) {
        debug!("ignoring blank message draft");
        return Ok(thread.clone());
    }

    let timestamp = wall_time(clock.now())?;
    let thread = thread.push_back(ids, |id| Message {
        id,
        text: draft.to_string(),
        timestamp,
        origin: MessageOrigin::Sent,
    })?;
    if let Some(message) = thread.last() {
        debug!(message_id = %message.id, "message sent");
    }
    Ok(thread)
}

/// Switches the open conversation. Unknown ids leave the inbox as it was.
pub fn select_conversation(inbox: &Inbox, conversation_id: &EntityId) -> Inbox {
    if !inbox.conversations.contains(conversation_id) {
        debug!(conversation_id = %conversation_id, "unknown conversation, selection unchanged");
        return inbox.clone();
    }

    Inbox {
        selected: Some(conversation_id.clone()),
        ..inbox.clone()
    }
}
