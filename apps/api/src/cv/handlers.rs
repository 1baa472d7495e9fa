//! Axum route handlers for the CV summarizer.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::cv::models::{CvSummary, SummarizeResponse};
use crate::cv::pdf;
use crate::errors::AppError;
use crate::state::CvState;

const FILE_FIELD: &str = "file";
const ONLY_PDF: &str = "Only .pdf files are accepted.";

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// POST /v1/cv/summarize
///
/// Pipeline: upload check → PDF text extraction → LLM structured summary →
/// schema validation. Nothing is sent upstream unless the upload is a `.pdf`
/// with extractable text.
pub async fn handle_summarize(
    State(state): State<CvState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|e| AppError::InvalidFile(format!("Expected a multipart upload: {e}")))?;
    let upload = read_upload(&mut multipart).await?;
    debug!(file_name = %upload.file_name, bytes = upload.bytes.len(), "Received CV upload");

    let max_chars = state.config.pdf_max_chars;
    let bytes = upload.bytes;
    let text = tokio::task::spawn_blocking(move || pdf::extract_text(&bytes, max_chars))
        .await
        .map_err(|e| AppError::Unexpected(format!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::PdfExtraction(e.to_string()))?;

    let response = summarize_text(&state, text).await?;
    info!(
        file_name = %upload.file_name,
        extracted_chars = response.extracted_chars,
        "CV summarized"
    );
    Ok(Json(response))
}

/// Sends already-extracted text to the model and validates its answer.
pub async fn summarize_text(state: &CvState, text: String) -> Result<SummarizeResponse, AppError> {
    let raw = state
        .summarizer
        .summarize(&text)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    let summary = CvSummary::from_model_output(raw)?;

    Ok(SummarizeResponse {
        extracted_chars: text.chars().count(),
        summary,
    })
}

/// Finds the `file` part and checks its extension before reading the body.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidFile(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if is_pdf_name(name) => name.to_string(),
            _ => return Err(AppError::InvalidFile(ONLY_PDF.to_string())),
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidFile(format!("Failed to read upload: {e}")))?;

        return Ok(Upload { file_name, bytes });
    }

    Err(AppError::InvalidFile(format!(
        "Missing '{FILE_FIELD}' part in multipart form."
    )))
}

fn is_pdf_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".pdf")
}
