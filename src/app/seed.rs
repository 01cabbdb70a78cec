use crate::domain::conversation::{Conversation, Message, MessageOrigin};
use crate::domain::post::{Author, Post};
use crate::domain::user::Profile;
use crate::infra::store::EntityStore;

const PLACEHOLDER: &str = "/placeholder.svg";

/// Initial records a session starts from.
#[derive(Debug, Clone)]
pub struct Seed {
    pub feed: EntityStore<Post>,
    pub conversations: EntityStore<Conversation>,
    pub thread: EntityStore<Message>,
    pub profile: Profile,
    pub profile_posts: EntityStore<Post>,
}

impl Seed {
    pub fn demo() -> Self {
        let profile = demo_profile();
        let profile_posts = demo_profile_posts(&profile.author());
        Self {
            feed: demo_feed(),
            conversations: demo_conversations(),
            thread: demo_thread(),
            profile,
            profile_posts,
        }
    }

    /// Empty collections around the demo profile.
    pub fn empty() -> Self {
        Self {
            feed: EntityStore::default(),
            conversations: EntityStore::default(),
            thread: EntityStore::default(),
            profile: demo_profile(),
            profile_posts: EntityStore::default(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    author: Author,
    content: &str,
    timestamp: &str,
    likes: u32,
    comments: u32,
    shares: u32,
    liked: bool,
    image: bool,
) -> Post {
    Post {
        id: id.into(),
        author,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        like_count: likes,
        comment_count: comments,
        share_count: shares,
        liked,
        image: image.then(|| PLACEHOLDER.to_string()),
    }
}

fn demo_feed() -> EntityStore<Post> {
    EntityStore::from_records(vec![
        post(
            "1",
            Author::new("Sarah Johnson", "sarah.j", PLACEHOLDER),
            "Just had the most amazing coffee at the new cafe downtown! The latte art was incredible ☕️ #coffee #goodmorning",
            "2 hours ago",
            24,
            5,
            2,
            false,
            true,
        ),
        post(
            "2",
            Author::new("Mike Chen", "mike.chen", PLACEHOLDER),
            "Working on some exciting new projects! Can't wait to share what we've been building. The future is looking bright! 🚀",
            "4 hours ago",
            47,
            12,
            8,
            true,
            false,
        ),
        post(
            "3",
            Author::new("Emma Wilson", "emma.w", PLACEHOLDER),
            "Beautiful sunset today! Nature never fails to amaze me. Taking a moment to appreciate the simple things in life 🌅",
            "6 hours ago",
            89,
            23,
            15,
            false,
            true,
        ),
    ])
}

fn conversation(
    id: &str,
    name: &str,
    last_message: &str,
    timestamp: &str,
    unread_count: u32,
    online: bool,
) -> Conversation {
    Conversation {
        id: id.into(),
        name: name.to_string(),
        avatar: PLACEHOLDER.to_string(),
        last_message: last_message.to_string(),
        timestamp: timestamp.to_string(),
        unread_count,
        online,
    }
}

fn demo_conversations() -> EntityStore<Conversation> {
    EntityStore::from_records(vec![
        conversation("1", "Sarah Johnson", "Thanks for sharing those photos!", "2 min", 2, true),
        conversation("2", "Mike Chen", "See you at the meeting tomorrow", "1h", 0, true),
        conversation("3", "Emma Wilson", "The project looks amazing! 🎉", "3h", 1, false),
        conversation("4", "David Brown", "Let's catch up soon", "1d", 0, false),
        conversation("5", "Lisa Zhang", "Happy birthday! 🎂", "2d", 0, true),
    ])
}

fn message(id: &str, text: &str, timestamp: &str, origin: MessageOrigin) -> Message {
    Message {
        id: id.into(),
        text: text.to_string(),
        timestamp: timestamp.to_string(),
        origin,
    }
}

fn demo_thread() -> EntityStore<Message> {
    use MessageOrigin::{Received, Sent};

    EntityStore::from_records(vec![
        message("1", "Hey! How's your day going?", "10:30 AM", Received),
        message(
            "2",
            "Pretty good! Just working on some new projects. How about you?",
            "10:32 AM",
            Sent,
        ),
        message(
            "3",
            "Same here! Actually wanted to ask about those photos you mentioned",
            "10:33 AM",
            Received,
        ),
        message("4", "Of course! Let me share them with you right now", "10:35 AM", Sent),
        message("5", "Thanks for sharing those photos!", "10:40 AM", Received),
    ])
}

fn demo_profile() -> Profile {
    Profile {
        name: "Alex Rivera".to_string(),
        handle: "alex_rivera".to_string(),
        bio: "Digital creator, coffee enthusiast, and dog lover 🐕 Sharing my journey through tech, travel, and everyday adventures. Always learning something new!".to_string(),
        avatar: PLACEHOLDER.to_string(),
        cover_image: PLACEHOLDER.to_string(),
        location: "San Francisco, CA".to_string(),
        website: "alexrivera.dev".to_string(),
        joined: "March 2022".to_string(),
        followers_count: 2847,
        following_count: 892,
        posts_count: 156,
        verified: true,
    }
}

fn demo_profile_posts(author: &Author) -> EntityStore<Post> {
    EntityStore::from_records(vec![
        post(
            "1",
            author.clone(),
            "Just launched my new portfolio website! Spent weeks perfecting the design and I'm finally happy with it. Check it out and let me know what you think! 🚀",
            "2 days ago",
            89,
            23,
            12,
            false,
            true,
        ),
        post(
            "2",
            author.clone(),
            "Morning coding session with my favorite companion. There's something magical about writing code while my dog sleeps peacefully beside me. Perfect productivity vibes! ☕️👨‍💻",
            "1 week ago",
            124,
            45,
            8,
            true,
            true,
        ),
        post(
            "3",
            author.clone(),
            "Attended an amazing tech conference today! So many inspiring talks about the future of AI and web development. Already excited to implement some of the new ideas I learned.",
            "2 weeks ago",
            67,
            18,
            15,
            false,
            false,
        ),
    ])
}
