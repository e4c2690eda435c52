// Seat recommendation pipeline: prompt → model → parse, with a deterministic
// fallback. All model calls go through llm_client.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod prompt_builder;
pub mod prompts;
