use serde::{Deserialize, Serialize};

use crate::cache_control::CacheControl;

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Systems {
    String(String),
    Array(Vec<System>),
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum System {
    #[serde(rename = "text")]
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cache_control: Option<CacheControl>,
    },
}

impl From<&str> for Systems {
    fn from(s: &str) -> Self {
        Systems::String(s.to_string())
    }
}

impl Systems {
    /// Concatenated text of every system block.
    pub fn text(&self) -> String {
        match self {
            Systems::String(s) => s.clone(),
            Systems::Array(a) => a
                .iter()
                .map(|System::Text { text, .. }| text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
