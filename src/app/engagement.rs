use tracing::warn;

use crate::domain::post::Post;
use crate::domain::EntityId;
use crate::infra::store::EntityStore;

/// Flips `liked` and moves `like_count` one step in the same direction.
///
/// Unliking a post whose count is already zero leaves the count at zero.
pub fn toggle_like(mut post: Post) -> Post {
    if post.liked {
        if post.like_count == 0 {
            warn!(post_id = %post.id, "unlike on a post with no likes, count kept at zero");
        }
        post.like_count = post.like_count.saturating_sub(1);
    } else {
        post.like_count = post.like_count.saturating_add(1);
    }
    post.liked = !post.liked;
    post
}

pub fn increment_share(mut post: Post) -> Post {
    post.share_count = post.share_count.saturating_add(1);
    post
}

pub fn like_post(posts: &EntityStore<Post>, post_id: &EntityId) -> EntityStore<Post> {
    posts.update_by_id(post_id, toggle_like)
}

pub fn share_post(posts: &EntityStore<Post>, post_id: &EntityId) -> EntityStore<Post> {
    posts.update_by_id(post_id, increment_share)
}
