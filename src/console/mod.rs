//! Line-oriented presentation layer: reads commands, applies them to a
//! [`Session`], prints the affected snapshot as JSON.

pub mod command;

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;

use crate::app::messages::Inbox;
use crate::app::posts::media_posts;
use crate::app::session::{Session, SessionEvent};
use crate::app::social::ProfileState;
use crate::app::users::{format_count, initials};
use crate::domain::conversation::Conversation;
use crate::domain::post::Post;
use crate::infra::store::EntityStore;

use self::command::{Command, HELP};

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct ProfileView<'a> {
    #[serde(flatten)]
    state: &'a ProfileState,
    initials: String,
    followers_display: String,
    following_display: String,
    media: EntityStore<Post>,
}

impl<'a> ProfileView<'a> {
    fn new(state: &'a ProfileState) -> Self {
        Self {
            state,
            initials: initials(&state.profile.name),
            followers_display: format_count(state.profile.followers_count),
            following_display: format_count(state.profile.following_count),
            media: media_posts(&state.posts),
        }
    }
}

#[derive(Serialize)]
struct InboxView<'a> {
    #[serde(flatten)]
    inbox: &'a Inbox,
    open: Option<&'a Conversation>,
}

impl<'a> InboxView<'a> {
    fn new(inbox: &'a Inbox) -> Self {
        Self {
            inbox,
            open: inbox.selected_conversation(),
        }
    }
}

/// Drives `session` from `input` until end of input or `quit`.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                write_json(&mut output, &ErrorResponse { error: err.to_string() })?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::ShowFeed => write_json(&mut output, session.feed())?,
            Command::ShowProfile => write_json(&mut output, &ProfileView::new(session.profile()))?,
            Command::ShowInbox => write_json(&mut output, &InboxView::new(session.inbox()))?,
            Command::SearchConversations(query) => {
                write_json(&mut output, &session.search_conversations(&query))?
            }
            Command::SearchFeed(query) => write_json(&mut output, &session.search_feed(&query))?,
            Command::Event(event) => {
                let view = View::after(&event);
                if let Err(err) = session.dispatch(event) {
                    tracing::warn!(error = ?err, "session event failed");
                    write_json(&mut output, &ErrorResponse { error: err.to_string() })?;
                    continue;
                }
                match view {
                    View::Feed => write_json(&mut output, session.feed())?,
                    View::Profile => {
                        write_json(&mut output, &ProfileView::new(session.profile()))?
                    }
                    View::Inbox => write_json(&mut output, &InboxView::new(session.inbox()))?,
                }
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Screen to re-render after an event.
enum View {
    Feed,
    Profile,
    Inbox,
}

impl View {
    fn after(event: &SessionEvent) -> Self {
        match event {
            SessionEvent::LikePost(_) | SessionEvent::SharePost(_) | SessionEvent::CreatePost(_) => {
                View::Feed
            }
            SessionEvent::LikeProfilePost(_) | SessionEvent::ToggleFollow => View::Profile,
            SessionEvent::SelectConversation(_) | SessionEvent::SendMessage(_) => View::Inbox,
        }
    }
}

fn write_json<W, T>(output: &mut W, value: &T) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(output, "{}", rendered)?;
    Ok(())
}
