//! Types for the Chat Completions API
//!
//! This module contains all types related to creating chat completions,
//! including request parameters, messages, and response structures.
//!
//! # Request vs Response Types
//!
//! Request types use a `Params` suffix (e.g., `ChatCompletionParams`), while
//! response types have no suffix (e.g., `ChatCompletion`, `Choice`).
//!
//! # Example
//!
//! ```
//! use viva_openai_sdk::ChatCompletionParams;
//!
//! let params = ChatCompletionParams::builder("gpt-4o-mini")
//!     .system("You are a helpful assistant.")
//!     .user("Hello!")
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Request Types
// ============================================================================

/// Parameters for creating a chat completion
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionParams {
    /// The model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// The messages in the conversation
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Stop sequences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl ChatCompletionParams {
    /// Create a builder for ChatCompletionParams
    ///
    /// # Example
    ///
    /// ```
    /// use viva_openai_sdk::ChatCompletionParams;
    ///
    /// let params = ChatCompletionParams::builder("gpt-4o-mini")
    ///     .user("Hello!")
    ///     .temperature(0.7)
    ///     .build();
    /// ```
    pub fn builder(model: impl Into<String>) -> ChatCompletionParamsBuilder {
        ChatCompletionParamsBuilder::new(model)
    }
}

/// Builder for ChatCompletionParams
///
/// The builder starts with an empty message list; use `.message()`,
/// `.messages()`, or the role shortcuts `.system()`, `.user()`, and
/// `.assistant()` to append messages in conversation order.
#[derive(Debug, Clone)]
pub struct ChatCompletionParamsBuilder {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    max_tokens: Option<u32>,
    stop: Option<Vec<String>>,
}

impl ChatCompletionParamsBuilder {
    /// Create a new builder for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            top_p: None,
            max_tokens: None,
            stop: None,
        }
    }

    /// Append messages to the conversation
    ///
    /// Uses extend semantics: messages are added after any existing messages.
    pub fn messages(mut self, messages: impl IntoIterator<Item = ChatMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Append a single message to the conversation
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Append a system message
    ///
    /// Unlike APIs that carry the system instruction as a separate request
    /// field, Chat Completions models it as a message; order matters.
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(content));
        self
    }

    /// Append a user message
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(content));
        self
    }

    /// Append an assistant message
    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::assistant(content));
        self
    }

    /// Set the sampling temperature (0.0 to 2.0)
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set top-p sampling
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set stop sequences
    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Build the ChatCompletionParams
    pub fn build(self) -> ChatCompletionParams {
        ChatCompletionParams {
            model: self.model,
            messages: self.messages,
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            stop: self.stop,
        }
    }
}

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the conversation (request format)
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// The role of the message author
    pub role: Role,

    /// The content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    ///
    /// # Example
    ///
    /// ```
    /// use viva_openai_sdk::ChatMessage;
    ///
    /// let msg = ChatMessage::system("You are a helpful assistant.");
    /// ```
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response from the Chat Completions API
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    /// Unique identifier for the completion
    pub id: String,

    /// Object type (always "chat.completion")
    pub object: String,

    /// Unix timestamp of creation
    pub created: u64,

    /// Model that generated the response
    pub model: String,

    /// Candidate completions; only the first is normally used
    pub choices: Vec<Choice>,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

impl ChatCompletion {
    /// The text content of the first choice's message, if any
    ///
    /// Returns `None` when the response carries no choices or the first
    /// choice's message has no content.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// One candidate completion
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Position of this choice in the candidate list
    pub index: u32,

    /// The generated message
    pub message: ResponseMessage,

    /// Reason the model stopped generating
    pub finish_reason: Option<FinishReason>,
}

/// The generated message in a response choice
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Role of the message author (always "assistant" for completions)
    pub role: Role,

    /// Text content; absent for refusals and tool-call responses
    pub content: Option<String>,
}

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of the message
    Stop,

    /// Hit the max_tokens limit
    Length,

    /// Output was filtered
    ContentFilter,

    /// Model produced tool calls
    ToolCalls,
}

/// Token usage statistics
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,

    /// Total tokens billed
    pub total_tokens: u32,
}
