//! AI features powered by an external completion service

pub mod chat;
pub mod client;
pub mod insights;
pub mod prediction;
pub mod treatment;

pub use client::{ClaudeClient, CompletionClient, UnconfiguredClient};
