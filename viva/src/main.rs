// Single-shot content review prompt against the OpenAI Chat Completions API
//
// Prerequisites: Set OPENAI_API_KEY environment variable
//
// Run with: cargo run

use anyhow::Context;
use viva_openai_sdk::{ChatCompletionParams, OpenAi};

/// Persona for the review session. The instruction speaks of uploaded
/// documents; those reach the assistant out of band, not through this
/// program.
const REVIEW_SYSTEM_PROMPT: &str = "You are a helpful assistant that conducts content review. \
    This content review will be concerned with the information provided in the documents \
    uploaded by the student, and these documents only. You are not allowed to use information \
    from other sources to answer this question, but outside information may be used to \
    corroborate information provided in the document uploaded by the student. You will ask \
    the student questions and correct their response based on the accuracy of their statement \
    relative to the information provided in the uploaded documents.";

/// The question posed to the assistant
const REVIEW_QUESTION: &str = "Explain what probabilities are.";

/// Model variant the review runs against
const REVIEW_MODEL: &str = "gpt-4o-mini";

fn review_params() -> ChatCompletionParams {
    ChatCompletionParams::builder(REVIEW_MODEL)
        .system(REVIEW_SYSTEM_PROMPT)
        .user(REVIEW_QUESTION)
        .build()
}

/// Perform the one review exchange and return the assistant's reply text
async fn run(client: &OpenAi) -> anyhow::Result<String> {
    let completion = client.chat().create(review_params()).await?;

    let text = completion
        .text()
        .context("response contained no message content")?;

    Ok(text.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = OpenAi::from_env()?;
    let response = run(&client).await?;

    println!("{}", response);

    Ok(())
}
