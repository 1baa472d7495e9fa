// CV summarizer service: PDF upload → text extraction → structured LLM summary.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod pdf;
