//! Interview Assist — interview backend for college-essay brainstorming.

pub mod config;
pub mod error;
pub mod http;
pub mod interview;
pub mod llm;
