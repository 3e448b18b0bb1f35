// Section drafting: static section table, prompt resolution, and the single
// generation call. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod resolver;
pub mod sections;
