use serde::{Deserialize, Serialize};

pub mod error;

pub use error::*;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct V1MessagesResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub response_type: String, // "message"
    pub role: String, // "assistant"
    pub content: Vec<serde_json::Value>,
    pub model: String,
    pub stop_reason: Option<String>,
    pub stop_sequence: Option<String>,
    pub usage: Usage,
}

/// Typed view of one content block. Block types this crate does not model
/// are kept as raw JSON.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ResponseContent {
    Block(ResponseContentBlock),
    Unknown(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum ResponseContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "tool_use")]
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },

    #[serde(rename = "thinking")]
    Thinking {
        thinking: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        signature: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Usage {
    pub input_tokens: i32,
    pub output_tokens: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_creation_input_tokens: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<i32>,
}

impl From<&serde_json::Value> for ResponseContent {
    fn from(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| Self::Unknown(value.clone()))
    }
}

impl V1MessagesResponse {
    /// `content` is stored as received; this parses it on demand.
    pub fn blocks(&self) -> Vec<ResponseContent> {
        self.content.iter().map(ResponseContent::from).collect()
    }

    pub fn text(&self) -> String {
        self.blocks()
            .into_iter()
            .filter_map(|c| match c {
                ResponseContent::Block(ResponseContentBlock::Text { text }) => Some(text),
                _ => None,
            })
            .collect()
    }
}
