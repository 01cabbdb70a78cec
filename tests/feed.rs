//! Feed Tests
//!
//! Covers liking, sharing, composing and filtering feed posts.

mod common;

use common::{empty_session, id, seeded_session, SequenceIds};
use ronim::app::engagement::{increment_share, like_post, share_post, toggle_like};
use ronim::app::posts::{append_post, media_posts};
use ronim::app::seed::Seed;
use ronim::domain::post::{Author, Post, JUST_NOW};
use ronim::SessionEvent;

fn viewer() -> Author {
    Author::new("You", "you", "/placeholder.svg")
}

fn seeded_post(post_id: &str) -> Post {
    Seed::demo().feed.find(&id(post_id)).cloned().unwrap()
}

// ===========================================================================
// Likes
// ===========================================================================

#[test]
fn like_adds_one() {
    let post = seeded_post("1");
    assert!(!post.liked);

    let liked = toggle_like(post.clone());

    assert!(liked.liked);
    assert_eq!(liked.like_count, post.like_count + 1);
}

#[test]
fn unlike_removes_one() {
    let post = seeded_post("2");
    assert!(post.liked);

    let unliked = toggle_like(post.clone());

    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, post.like_count - 1);
}

#[test]
fn toggle_like_twice_round_trips() {
    for post in Seed::demo().feed.iter().cloned() {
        let back = toggle_like(toggle_like(post.clone()));
        assert_eq!(back.liked, post.liked);
        assert_eq!(back.like_count, post.like_count);
    }
}

#[test]
fn unlike_at_zero_stays_at_zero() {
    let mut post = seeded_post("1");
    post.liked = true;
    post.like_count = 0;

    let unliked = toggle_like(post);

    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 0);
}

#[test]
fn like_post_touches_only_target() {
    let feed = Seed::demo().feed;

    let next = like_post(&feed, &id("3"));

    assert_eq!(next.find(&id("3")).unwrap().like_count, 90);
    assert_eq!(next.find(&id("1")), feed.find(&id("1")));
    assert_eq!(next.find(&id("2")), feed.find(&id("2")));
}

#[test]
fn like_unknown_post_is_noop() {
    let feed = Seed::demo().feed;

    assert_eq!(like_post(&feed, &id("404")), feed);
}

// ===========================================================================
// Shares
// ===========================================================================

#[test]
fn share_n_times_adds_n() {
    let post = seeded_post("3");

    let shared = (0..7).fold(post.clone(), |p, _| increment_share(p));

    assert_eq!(shared.share_count, post.share_count + 7);
    assert_eq!(shared.like_count, post.like_count);
    assert_eq!(shared.liked, post.liked);
}

#[test]
fn share_post_on_feed() {
    let feed = Seed::demo().feed;

    let next = share_post(&share_post(&feed, &id("2")), &id("2"));

    assert_eq!(next.find(&id("2")).unwrap().share_count, 10);
}

// ===========================================================================
// Composing
// ===========================================================================

#[test]
fn blank_drafts_are_ignored() {
    let feed = Seed::demo().feed;
    let mut ids = SequenceIds::default();

    for draft in ["", "   ", "\n\t "] {
        let next = append_post(&feed, &mut ids, draft, &viewer()).unwrap();
        assert_eq!(next, feed);
    }
}

#[test]
fn new_post_lands_on_top() {
    let feed = Seed::demo().feed;
    let mut ids = SequenceIds::default();

    let next = append_post(&feed, &mut ids, "hello", &viewer()).unwrap();

    assert_eq!(next.len(), feed.len() + 1);
    let post = next.first().unwrap();
    assert_eq!(post.id, id("new-1"));
    assert_eq!(post.content, "hello");
    assert_eq!(post.author, viewer());
    assert_eq!(post.timestamp, JUST_NOW);
    assert_eq!(post.like_count, 0);
    assert_eq!(post.comment_count, 0);
    assert_eq!(post.share_count, 0);
    assert!(!post.liked);
    assert!(post.image.is_none());
    assert_eq!(&next.as_slice()[1..], feed.as_slice());
}

#[test]
fn draft_content_is_kept_as_typed() {
    let feed = Seed::demo().feed;
    let mut ids = SequenceIds::default();

    let next = append_post(&feed, &mut ids, "  spaced out  ", &viewer()).unwrap();

    assert_eq!(next.first().unwrap().content, "  spaced out  ");
}

#[test]
fn media_posts_keeps_posts_with_images() {
    let media = media_posts(&Seed::demo().feed);

    let ids: Vec<_> = media.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

// ===========================================================================
// Session
// ===========================================================================

#[test]
fn session_applies_feed_events_in_order() {
    let mut session = seeded_session();

    session.dispatch(SessionEvent::CreatePost("first".into())).unwrap();
    session.dispatch(SessionEvent::CreatePost("second".into())).unwrap();
    session.dispatch(SessionEvent::LikePost(id("new-1"))).unwrap();
    session.dispatch(SessionEvent::SharePost(id("1"))).unwrap();

    let feed = session.feed();
    let contents: Vec<_> = feed.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents[..2], ["second", "first"]);
    assert_eq!(feed.len(), 5);

    let first = feed.find(&id("new-1")).unwrap();
    assert!(first.liked);
    assert_eq!(first.like_count, 1);
    assert_eq!(first.author.handle, "you");
    assert_eq!(feed.find(&id("1")).unwrap().share_count, 3);
}

#[test]
fn session_ignores_blank_post() {
    let mut session = seeded_session();
    let before = session.feed().clone();

    session.dispatch(SessionEvent::CreatePost("    ".into())).unwrap();

    assert_eq!(session.feed(), &before);
}

#[test]
fn search_feed_by_author() {
    let session = seeded_session();

    let found = session.search_feed("CHEN");

    assert_eq!(found.len(), 1);
    assert_eq!(found.first().unwrap().author.name, "Mike Chen");
    assert_eq!(session.search_feed(""), *session.feed());
}

#[test]
fn empty_session_starts_with_no_posts() {
    let mut session = empty_session();
    assert!(session.feed().is_empty());

    session.dispatch(SessionEvent::CreatePost("hi".into())).unwrap();

    assert_eq!(session.feed().len(), 1);
}
