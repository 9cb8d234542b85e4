//! AI adapter module. Implements TextGenerationPort for the assisted plan rewrite.
//!
//! Provides OpenAI-compatible adapter and mock adapter for testing.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::{MockAiAdapter, MockReply};
pub use openai_adapter::OpenAiAdapter;
