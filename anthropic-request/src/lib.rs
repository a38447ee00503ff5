use serde::{Deserialize, Serialize};

pub mod cache_control;
pub mod content;
pub mod message;
pub mod system;

pub use cache_control::*;
pub use content::*;
pub use message::*;
pub use system::*;

#[derive(Debug, Deserialize, Serialize)]
pub struct V1MessagesRequest {
    pub max_tokens: i32,
    pub messages: Vec<Message>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Systems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl V1MessagesRequest {
    pub fn builder() -> V1MessagesRequestBuilder {
        V1MessagesRequestBuilder::default()
    }
}

#[derive(Default)]
pub struct V1MessagesRequestBuilder {
    max_tokens: i32,
    messages: Vec<Message>,
    model: String,
    system: Option<Systems>,
    temperature: Option<f32>,
}

impl V1MessagesRequestBuilder {
    pub fn max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn system(mut self, system: Option<Systems>) -> Self {
        self.system = system;
        self
    }

    pub fn temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn build(self) -> V1MessagesRequest {
        V1MessagesRequest {
            max_tokens: self.max_tokens,
            messages: self.messages,
            model: self.model,
            stream: None,
            system: self.system,
            temperature: self.temperature,
        }
    }
}
