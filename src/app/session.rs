use anyhow::Result;
use tracing::debug;

use crate::app::engagement::{like_post, share_post};
use crate::app::messages::{append_message, select_conversation, Inbox};
use crate::app::posts::append_post;
use crate::app::search::filter_by_name;
use crate::app::seed::Seed;
use crate::app::social::{like_profile_post, toggle_follow, ProfileState};
use crate::config::AppConfig;
use crate::domain::conversation::Conversation;
use crate::domain::post::{Author, Post};
use crate::domain::EntityId;
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::ids::{IdSource, UlidIds};
use crate::infra::store::EntityStore;

/// A user interaction, applied to a [`Session`] in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LikePost(EntityId),
    SharePost(EntityId),
    CreatePost(String),
    LikeProfilePost(EntityId),
    ToggleFollow,
    SelectConversation(EntityId),
    SendMessage(String),
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::LikePost(_) => "like_post",
            SessionEvent::SharePost(_) => "share_post",
            SessionEvent::CreatePost(_) => "create_post",
            SessionEvent::LikeProfilePost(_) => "like_profile_post",
            SessionEvent::ToggleFollow => "toggle_follow",
            SessionEvent::SelectConversation(_) => "select_conversation",
            SessionEvent::SendMessage(_) => "send_message",
        }
    }
}

/// All state of one viewer's session. Owned by the caller; every event
/// swaps in fresh snapshots, so a failed event leaves the session as it was.
pub struct Session {
    viewer: Author,
    feed: EntityStore<Post>,
    inbox: Inbox,
    profile: ProfileState,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(
        config: &AppConfig,
        seed: Seed,
        ids: Box<dyn IdSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            viewer: config.viewer(),
            feed: seed.feed,
            inbox: Inbox::new(seed.conversations, seed.thread),
            profile: ProfileState::new(seed.profile, seed.profile_posts),
            ids,
            clock,
        }
    }

    /// Session on the system clock with ULID ids.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let seed = if config.seed_data {
            Seed::demo()
        } else {
            Seed::empty()
        };
        let clock = SystemClock::with_offset_hours(config.utc_offset_hours)?;
        Ok(Self::new(
            config,
            seed,
            Box::new(UlidIds::new()),
            Box::new(clock),
        ))
    }

    pub fn dispatch(&mut self, event: SessionEvent) -> Result<()> {
        debug!(event = event.name(), "applying session event");

        match event {
            SessionEvent::LikePost(post_id) => {
                self.feed = like_post(&self.feed, &post_id);
            }
            SessionEvent::SharePost(post_id) => {
                self.feed = share_post(&self.feed, &post_id);
            }
            SessionEvent::CreatePost(draft) => {
                self.feed = append_post(&self.feed, &mut *self.ids, &draft, &self.viewer)?;
            }
            SessionEvent::LikeProfilePost(post_id) => {
                self.profile = like_profile_post(&self.profile, &post_id);
            }
            SessionEvent::ToggleFollow => {
                self.profile = toggle_follow(&self.profile);
            }
            SessionEvent::SelectConversation(conversation_id) => {
                self.inbox = select_conversation(&self.inbox, &conversation_id);
            }
            SessionEvent::SendMessage(draft) => {
                if self.inbox.selected.is_none() {
                    debug!("no open conversation, message dropped");
                    return Ok(());
                }
                let thread = append_message(
                    &self.inbox.thread,
                    &mut *self.ids,
                    &*self.clock,
                    &draft,
                )?;
                self.inbox.thread = thread;
            }
        }

        Ok(())
    }

    pub fn viewer(&self) -> &Author {
        &self.viewer
    }

    pub fn feed(&self) -> &EntityStore<Post> {
        &self.feed
    }

    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn search_conversations(&self, query: &str) -> EntityStore<Conversation> {
        filter_by_name(&self.inbox.conversations, query)
    }

    pub fn search_feed(&self, query: &str) -> EntityStore<Post> {
        filter_by_name(&self.feed, query)
    }
}
