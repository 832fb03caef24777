//! Classification endpoints.
//!
//! Two request shapes feed the same pipeline: a JSON body with a `content`
//! string, or a multipart upload with a `file` part. Both funnel into
//! `Classifier::classify`, which applies the minimum-length gate uniformly.

use axum::{
    extract::{Extension, Multipart},
    Json,
};
use classification::{extract_text, Classification, SourceFormat};
use serde::Deserialize;

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct ClassifyTextRequest {
    #[serde(default)]
    pub content: String,
}

/// POST /classify-text
///
/// Classify email text submitted directly.
pub async fn classify_text_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ClassifyTextRequest>,
) -> Result<Json<Classification>, ApiError> {
    let result = state.classifier.classify(&request.content).await?;
    Ok(Json(result))
}

/// POST /classify-file
///
/// Classify an email uploaded as a `.txt` or `.pdf` file. The extension is
/// checked against the allow-list before the upload's bytes are read.
pub async fn classify_file_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Classification>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::bad_request("file field is missing a filename"))?;

        let format = SourceFormat::from_filename(&filename)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {}", e)))?;

        tracing::debug!(filename = %filename, size = bytes.len(), "classifying uploaded file");

        let email_text = extract_text(&bytes, format)?;
        let result = state.classifier.classify(&email_text).await?;
        return Ok(Json(result));
    }

    Err(ApiError::bad_request(
        "multipart request must include a `file` field",
    ))
}
