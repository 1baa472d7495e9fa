// Prompt and response schema for CV summarization.

use serde_json::{json, Value};

pub const CV_SUMMARY_SYSTEM: &str = "\
You are a recruiter assistant. Extract and summarize the candidate CV into JSON.
Rules:
- If a field is not present, set it to null (except work_experience_summary which must be a string).
- Keep work_experience_summary to 3-6 sentences, focusing on roles, scope, impact, and seniority.
- Do not invent facts.
";

pub fn cv_summary_prompt(cv_text: &str) -> String {
    format!("CV TEXT:\n\n{cv_text}")
}

/// `json_schema` block of the structured-output response format.
pub fn cv_summary_schema() -> Value {
    json!({
        "name": "cv_summary",
        "schema": {
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "name": { "type": ["string", "null"] },
                "location": { "type": ["string", "null"] },
                "work_experience_summary": { "type": "string" }
            },
            "required": ["name", "location", "work_experience_summary"]
        }
    })
}
