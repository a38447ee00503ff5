use serde::{Deserialize, Serialize};

use crate::content::{AssistantContents, UserContent, UserContents};

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    #[serde(rename = "assistant")]
    Assistant { content: AssistantContents },
    #[serde(rename = "user")]
    User { content: UserContents },
}

impl Message {
    /// A user turn holding a single text block.
    pub fn user_text(text: impl Into<String>) -> Self {
        Message::User {
            content: UserContents::Array(vec![UserContent::text(text)]),
        }
    }
}
