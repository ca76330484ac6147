//! Relay bot that forwards Discord messages to the Gemini API and posts the
//! completion back, chunked to fit the platform's message-length limit.

/// Runtime configuration loaded from the environment.
pub mod config;
/// Client for the Gemini completion API.
pub mod gemini;
/// Gateway event handler.
pub mod handler;
/// Pure filtering and chunking logic.
pub mod relay;
