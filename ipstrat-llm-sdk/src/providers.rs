//! Provider name constants

/// Google (Gemini models)
pub const GOOGLE: &str = "google";

/// Page where Google AI Studio users check their request quota
pub const GOOGLE_USAGE_URL: &str = "https://ai.dev/usage";
