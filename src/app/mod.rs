pub mod engagement;
pub mod messages;
pub mod posts;
pub mod search;
pub mod seed;
pub mod session;
pub mod social;
pub mod users;

/// Drafts that are empty or whitespace-only are never committed.
pub(crate) fn is_blank(draft: &str) -> bool {
    draft.trim().is_empty()
}
