//! Minimal OpenAI Chat Completions client for viva
//!
//! This crate provides a lightweight, focused client for the OpenAI Chat
//! Completions API: build a request from role-tagged messages, perform one
//! call, read the response. There is deliberately no streaming, no retry
//! loop, and no conversation state.
//!
//! # Quick Start
//!
//! ```no_run
//! // Requires OPENAI_API_KEY environment variable
//! use viva_openai_sdk::{ChatCompletionParams, OpenAi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAi::from_env()?;
//!
//! let params = ChatCompletionParams::builder("gpt-4o-mini")
//!     .system("You are a helpful assistant.")
//!     .user("Hello!")
//!     .build();
//!
//! let completion = client.chat().create(params).await?;
//! println!("{}", completion.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! # Request IDs and Rate Limits
//!
//! Access the request ID and rate limit headers for debugging:
//!
//! ```no_run
//! // Requires OPENAI_API_KEY environment variable
//! use viva_openai_sdk::{ChatCompletionParams, OpenAi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAi::from_env()?;
//! let params = ChatCompletionParams::builder("gpt-4o-mini")
//!     .user("Hello!")
//!     .build();
//!
//! let response = client.chat().create_with_metadata(params).await?;
//!
//! if let Some(request_id) = response.request_id() {
//!     println!("Request ID: {}", request_id);
//! }
//! if let Some(rate_limit) = response.rate_limit() {
//!     println!("Requests remaining: {:?}", rate_limit.requests_remaining);
//! }
//! # Ok(())
//! # }
//! ```

// Domain modules
pub mod chat;
mod client;
mod error;

// Client types
pub use client::{Chat, OpenAi, OpenAiBuilder, RateLimitInfo, RawResponse, Response};

// Error types
pub use error::{ApiError, ApiErrorResponse, OpenAiError};

// Chat - request types
pub use chat::{ChatCompletionParams, ChatCompletionParamsBuilder, ChatMessage, Role};

// Chat - response types
pub use chat::{ChatCompletion, Choice, FinishReason, ResponseMessage, Usage};
