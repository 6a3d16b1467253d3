//! Handler for cover image uploads.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored image, ready to be set as a project's
    /// `image_url`.
    pub image_url: String,
}

/// POST /api/v1/uploads/images
///
/// Accepts a multipart form with a single `file` field. The image is
/// stored under a fresh random key; a storage failure is returned to
/// the caller, never silently swallowed.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".into()));
        }

        let image_url = state
            .uploader
            .upload(&filename, content_type.as_deref(), bytes.to_vec())
            .await?;

        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: UploadResponse { image_url },
            }),
        ));
    }

    Err(AppError::BadRequest(
        "Multipart field 'file' is required".into(),
    ))
}
