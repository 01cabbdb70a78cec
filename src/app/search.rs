use crate::domain::conversation::Conversation;
use crate::domain::post::Post;
use crate::domain::user::Profile;
use crate::infra::store::{EntityStore, Record};

/// Records with a human-readable name to search on.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for Conversation {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Post {
    fn display_name(&self) -> &str {
        &self.author.name
    }
}

impl Named for Profile {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match on the display name.
/// The query is not trimmed.
pub fn matches_name<T: Named + ?Sized>(record: &T, query: &str) -> bool {
    record
        .display_name()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Records whose name contains `query`, in original order. An empty query
/// returns the collection unchanged.
pub fn filter_by_name<T>(records: &EntityStore<T>, query: &str) -> EntityStore<T>
where
    T: Record + Named + Clone,
{
    if query.is_empty() {
        return records.clone();
    }

    records.filtered(|record| matches_name(record, query))
}
