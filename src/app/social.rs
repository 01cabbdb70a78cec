use serde::Serialize;
use tracing::debug;

use crate::app::engagement::like_post;
use crate::domain::post::Post;
use crate::domain::user::Profile;
use crate::domain::EntityId;
use crate::infra::store::EntityStore;

/// A profile as seen by the local viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileState {
    pub profile: Profile,
    pub following: bool,
    pub posts: EntityStore<Post>,
}

impl ProfileState {
    pub fn new(profile: Profile, posts: EntityStore<Post>) -> Self {
        Self {
            profile,
            following: false,
            posts,
        }
    }
}

/// Flips the follow flag. Follower counters are left alone.
pub fn toggle_follow(state: &ProfileState) -> ProfileState {
    let following = !state.following;
    debug!(handle = %state.profile.handle, following, "follow toggled");
    ProfileState {
        following,
        ..state.clone()
    }
}

pub fn like_profile_post(state: &ProfileState, post_id: &EntityId) -> ProfileState {
    ProfileState {
        posts: like_post(&state.posts, post_id),
        ..state.clone()
    }
}
