// Content generation: keyword extraction, resume tailoring, email drafts.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod email_draft;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod tailor;
