//! # ipstrat LLM SDK
//!
//! Provider plumbing for the IP strategist: a provider-agnostic [`client::LlmClient`]
//! trait and a Google Gemini implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ipstrat_llm_sdk::client::LlmClient;
//! use ipstrat_llm_sdk::gemini::GeminiClient;
//! use ipstrat_llm_sdk::types::CompletionRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new("your-google-api-key")?;
//!     let response = client
//!         .complete(CompletionRequest::prompt(
//!             client.model_name(),
//!             "Should I trademark before filing a patent?",
//!         ))
//!         .await?;
//!
//!     println!("Response: {}", response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod gemini;
pub mod models;
pub mod providers;
pub mod types;
