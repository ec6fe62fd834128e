//! Google Gemini API client and types
//!
//! Covers the `generateContent` and model listing endpoints of the v1beta REST API.

pub mod builder;
pub mod client;
pub mod types;

pub use builder::MessageBuilder;
pub use client::GeminiClient;
pub use types::*;

// Re-export model constants
pub use crate::models::gemini::*;
