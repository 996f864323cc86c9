use serde::{Deserialize, Serialize};

/// Submission form body. Missing fields deserialize to empty text; the
/// store accepts them as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// Moderation form body. The literal string "true" approves; any other
/// value, or a missing field, rejects.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModerationForm {
    #[serde(default)]
    pub approved: String,
}

impl ModerationForm {
    pub fn is_approval(&self) -> bool {
        self.approved == "true"
    }
}
