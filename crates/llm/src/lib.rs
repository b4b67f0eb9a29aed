//! Text-generation gateway.
//!
//! Renders a per-kind prompt template around free-text user input and
//! forwards it to a chat-completion endpoint, returning the reply verbatim.
//! Nothing here interprets the generated text.

pub mod config;
pub mod error;
pub mod gateway;
pub mod kind;
pub mod openai;
pub mod provider;
pub mod templates;

pub use error::CompletionError;
pub use gateway::{CompletionGateway, GenerationOutcome};
pub use kind::GenerationKind;
pub use provider::{Completion, CompletionProvider, ProviderRegistry};
