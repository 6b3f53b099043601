use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Channel {
    pub id: i64,
    pub channel_name: String,
    pub channel_url: String,
    pub avatar_image: Option<String>,
    pub banner_image: Option<String>,
    pub subscriber_count: Option<i64>,
}

/// A video fetched for display or selection, not yet committed to anything.
/// `id` is the backend's row id, `video_id` the external YouTube id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoCandidate {
    pub id: i64,
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub published_at: String,
    #[serde(default)]
    pub is_live: bool,
}
