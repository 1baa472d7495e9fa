// News search service: area + query → Tavily news search → normalized articles.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod query;
