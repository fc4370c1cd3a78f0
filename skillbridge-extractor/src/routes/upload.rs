use axum::{Json, extract::Multipart};
use serde::Serialize;
use tracing::info;

use crate::{errors::AppError, extract};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub skills: Vec<String>,
}

/// POST /upload_resume/
/// Accepts a single multipart `file` field and returns the recognized skills.
/// An upload with no recognizable skills is not an error; the client decides
/// what to tell the user about an empty list.
pub async fn upload_resume_handler(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("resume").to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            file = Some((name, bytes.to_vec()));
        }
    }

    let (name, bytes) =
        file.ok_or_else(|| AppError::Validation("missing 'file' field".to_owned()))?;

    let text = extract::extract_text(&name, &bytes)?;
    let skills = extract::scan_skills(&text);
    info!("extracted {} skills from {name}", skills.len());

    Ok(Json(UploadResponse { skills }))
}
