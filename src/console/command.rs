use std::str::FromStr;

use thiserror::Error;

use crate::app::session::SessionEvent;
use crate::domain::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(SessionEvent),
    ShowFeed,
    ShowProfile,
    ShowInbox,
    SearchConversations(String),
    SearchFeed(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} requires an id")]
    MissingId(&'static str),
}

pub const HELP: &str = "\
feed                  show the feed
like <id>             like or unlike a feed post
share <id>            share a feed post
post <text>           publish a post
profile               show the profile
like-profile <id>     like or unlike a profile post
follow                follow or unfollow the profile
inbox                 show conversations and the open thread
open <id>             open a conversation
send <text>           send a message in the open thread
search <query>        filter conversations by name
find <query>          filter the feed by author name
help                  show this help
quit                  exit";

impl FromStr for Command {
    type Err = CommandError;

    /// Splits on the first space. Everything after it is the argument,
    /// kept as typed so drafts and queries are not altered.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, arg),
            None => (line, ""),
        };

        let command = match verb {
            "" => return Err(CommandError::Empty),
            "feed" => Command::ShowFeed,
            "profile" => Command::ShowProfile,
            "inbox" => Command::ShowInbox,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "follow" => Command::Event(SessionEvent::ToggleFollow),
            "post" => Command::Event(SessionEvent::CreatePost(arg.to_string())),
            "send" => Command::Event(SessionEvent::SendMessage(arg.to_string())),
            "search" => Command::SearchConversations(arg.to_string()),
            "find" => Command::SearchFeed(arg.to_string()),
            "like" => Command::Event(SessionEvent::LikePost(required_id("like", arg)?)),
            "share" => Command::Event(SessionEvent::SharePost(required_id("share", arg)?)),
            "like-profile" => Command::Event(SessionEvent::LikeProfilePost(required_id(
                "like-profile",
                arg,
            )?)),
            "open" => Command::Event(SessionEvent::SelectConversation(required_id("open", arg)?)),
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required_id(verb: &'static str, arg: &str) -> Result<EntityId, CommandError> {
    let id = arg.trim();
    if id.is_empty() {
        return Err(CommandError::MissingId(verb));
    }
    Ok(EntityId::new(id))
}
