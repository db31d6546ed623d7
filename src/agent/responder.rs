use async_trait::async_trait;

/// A conversational entry point. Always answers with text, never an error.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, user_text: &str) -> String;
}
