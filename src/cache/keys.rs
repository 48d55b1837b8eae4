//! Cache key definitions.
//!
//! Namespaced keys for the lookups the cache fronts. Each kind gets its own
//! prefix so unrelated callers never collide on a key, and related keys can
//! be dropped together with [`CacheStore::invalidate_pattern`].
//!
//! [`CacheStore::invalidate_pattern`]: crate::cache::CacheStore::invalidate_pattern

use std::fmt;

/// Identifies a cached lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The full chat list
    ChatList,
    /// Details of one chat
    ChatInfo(i64),
    /// Profile of one user
    UserInfo(i64),
    /// A page of messages from a chat
    Messages { chat_id: i64, limit: u32 },
    /// A settings section
    Settings(String),
    /// Results of a message search
    Search { query: String, limit: u32 },
    /// An analytics metric computed for a chat
    Analytics { chat_id: i64, metric: String },
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChatList => write!(f, "chats:list"),
            Self::ChatInfo(chat_id) => write!(f, "chat:{chat_id}:info"),
            Self::UserInfo(user_id) => write!(f, "user:{user_id}:info"),
            Self::Messages { chat_id, limit } => write!(f, "messages:{chat_id}:limit:{limit}"),
            Self::Settings(section) => write!(f, "settings:{section}"),
            // Queries differing only in case share one entry
            Self::Search { query, limit } => {
                write!(f, "search:{}:limit:{limit}", query.trim().to_lowercase())
            }
            Self::Analytics { chat_id, metric } => write!(f, "analytics:{chat_id}:{metric}"),
        }
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.to_string()
    }
}

pub fn chat_list_key() -> String {
    CacheKey::ChatList.to_string()
}

pub fn chat_info_key(chat_id: i64) -> String {
    CacheKey::ChatInfo(chat_id).to_string()
}

pub fn user_info_key(user_id: i64) -> String {
    CacheKey::UserInfo(user_id).to_string()
}

pub fn messages_key(chat_id: i64, limit: u32) -> String {
    CacheKey::Messages { chat_id, limit }.to_string()
}

pub fn settings_key(section: &str) -> String {
    CacheKey::Settings(section.to_string()).to_string()
}

pub fn search_key(query: &str, limit: u32) -> String {
    CacheKey::Search {
        query: query.to_string(),
        limit,
    }
    .to_string()
}

pub fn analytics_key(chat_id: i64, metric: &str) -> String {
    CacheKey::Analytics {
        chat_id,
        metric: metric.to_string(),
    }
    .to_string()
}
