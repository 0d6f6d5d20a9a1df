//! Vision gateway client for bill text extraction.
//!
//! Sends a bill image reference to an OpenAI-compatible vision endpoint and
//! returns the raw text the model produced. Everything downstream (unit
//! parsing, emissions, points) treats that text as an opaque string; the
//! `NOT_FOUND` sentinel inside it is the only structured signal, and no other
//! part of the provider's response shape leaks past this crate.

mod error;
mod gateway;

pub use error::{Result, VisionError};
pub use gateway::{BILL_READING_PROMPT, GatewayClient};

use async_trait::async_trait;

/// The single capability the rest of the system consumes from the vision
/// provider.
#[async_trait]
pub trait TextExtractor {
    /// Produce free-form text for the document behind `image_url`.
    async fn extract_text(&self, image_url: &str) -> Result<String>;
}
