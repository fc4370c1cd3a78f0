//! Client for the resume extraction service.
//!
//! One fire-and-forget call per upload: post the file, read the skill list
//! back. No retries and no timeout beyond the transport default; failures
//! surface as a single alert in the UI.

use std::path::{Path, PathBuf};

use reqwest::multipart;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("extraction service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("extraction service returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("no skills found in resume")]
    NoSkills,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    skills: Vec<String>,
}

/// Posts resume files to the extraction service as multipart form data.
#[derive(Debug, Clone)]
pub struct ExtractorClient {
    base_url: String,
    http: reqwest::Client,
}

impl ExtractorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Upload the file at `path` and return the extracted skill names.
    /// An empty list from the service is reported as [`Error::NoSkills`].
    pub async fn extract_skills(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::ReadFile {
            path: path.to_owned(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_owned());

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name));
        let response = self
            .http
            .post(format!("{}/upload_resume/", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status(),
            });
        }

        let body: ExtractResponse = response.json().await?;
        debug!("extraction service returned {} skills", body.skills.len());

        if body.skills.is_empty() {
            return Err(Error::NoSkills);
        }

        Ok(body.skills)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ExtractorClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_response_payload_shape() {
        let body: ExtractResponse =
            serde_json::from_str(r#"{"skills": ["Python", "Sql"]}"#).unwrap();
        assert_eq!(body.skills, ["Python", "Sql"]);
    }

    #[test]
    fn test_no_skills_error_matches_the_alert_copy() {
        assert_eq!(Error::NoSkills.to_string(), "no skills found in resume");
    }
}
