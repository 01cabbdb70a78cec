use anyhow::Result;
use tracing::debug;

use crate::app::is_blank;
use crate::domain::post::{Author, Post};
use crate::infra::ids::IdSource;
use crate::infra::store::EntityStore;

/// Puts a new post built from `draft` at the top of the feed.
///
/// A blank draft returns the feed unchanged. The content is kept exactly as
/// typed.
pub fn append_post<I>(
    posts: &EntityStore<Post>,
    ids: &mut I,
    draft: &str,
    author: &Author,
) -> Result<EntityStore<Post>>
where
    I: IdSource + ?Sized,
{
    if is_blank(draft) {
        debug!("ignoring blank post draft");
        return Ok(posts.clone());
    }

    let posts = posts.insert_front(ids, |id| Post::composed(id, author.clone(), draft))?;
    if let Some(post) = posts.first() {
        debug!(post_id = %post.id, author = %author.handle, "post created");
    }
    Ok(posts)
}

/// Posts that carry an image, in feed order.
pub fn media_posts(posts: &EntityStore<Post>) -> EntityStore<Post> {
    posts.filtered(Post::has_media)
}
