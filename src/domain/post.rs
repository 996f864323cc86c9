use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// A freshly submitted post is always pending; only the moderation
    /// operations may flip `approved` or remove the post.
    pub fn new(content: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            author,
            approved: false,
            created_at: Utc::now(),
        }
    }
}
