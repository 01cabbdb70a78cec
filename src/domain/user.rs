use serde::{Deserialize, Serialize};

use crate::domain::post::Author;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub avatar: String,
    pub cover_image: String,
    pub location: String,
    pub website: String,
    pub joined: String,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
    pub verified: bool,
}

impl Profile {
    /// Identity stamped on posts authored by this profile.
    pub fn author(&self) -> Author {
        Author::new(&self.name, &self.handle, &self.avatar)
    }
}

impl From<&Profile> for Author {
    fn from(profile: &Profile) -> Self {
        profile.author()
    }
}
