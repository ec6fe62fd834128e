//! Model constants for the Google Gemini provider
//!
//! Model IDs are the names accepted in the `models/{id}:generateContent` path.

/// Google Gemini model constants
pub mod gemini {
    /// Gemini 1.5 Flash - fast general model, the service default
    pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";

    /// Names tried, in order, when probing which model a key can reach
    pub const PROBE_CANDIDATES: &[&str] = &[
        "gemini-1.5-flash",
        "gemini-1.5-flash-001",
        "gemini-1.5-flash-002",
        "gemini-1.5-pro",
        "gemini-1.5-pro-001",
        "gemini-1.5-pro-002",
        "gemini-pro",
        "gemini-pro-vision",
        "gemini-1.0-pro",
        "gemini-1.0-pro-001",
        "gemini-flash-1.5",
        "gemini-2.0-flash-exp",
    ];
}
