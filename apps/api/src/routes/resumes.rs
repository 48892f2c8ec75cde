//! Resume endpoints — enhancement + document build + artifact storage.
//!
//! Document builds are CPU-bound, so they run inside
//! `tokio::task::spawn_blocking`; each build receives its own record and
//! writes its own artifact (`generated_resume_<username>.pdf`), keeping
//! concurrent builds for different users fully independent.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::error::DocumentError;
use crate::document::node::LayoutNode;
use crate::document::{self, BuiltDocument};
use crate::enhance::build_content_record;
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::models::resume::ContentRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    pub username: String,
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub page_count: usize,
    pub generated_at: DateTime<Utc>,
    /// Plain-text fallback shown when the PDF cannot be previewed.
    pub preview: String,
    /// The enhanced record the document was built from.
    pub content: ContentRecord,
}

#[derive(Debug, Serialize)]
pub struct RenderResumeResponse {
    pub page_count: usize,
    pub size_bytes: usize,
    pub preview: String,
    pub nodes: Vec<LayoutNode>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
/// Full pipeline: enhance the raw profile, build the document, store the
/// artifact under the caller's username.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateResumeRequest>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let username = valid_username(&req.username)?.to_string();

    let record = build_content_record(&req.profile, state.enhancer.as_ref()).await?;

    let filename = artifact_filename(&username);
    let path = state.config.output_dir.join(&filename);
    let (built, record) = tokio::task::spawn_blocking(move || {
        let built = document::build_document(&record)?;
        document::write_artifact(&built, &path)?;
        Ok::<_, DocumentError>((built, record))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("document build task failed: {e}")))??;

    info!(
        "Generated resume for '{username}': {} page(s), {} bytes",
        built.page_count,
        built.bytes.len()
    );

    Ok(Json(GenerateResumeResponse {
        resume_id: Uuid::new_v4(),
        filename,
        page_count: built.page_count,
        generated_at: Utc::now(),
        preview: built.preview,
        content: record,
    }))
}

/// POST /api/v1/resumes/render
/// Builds a document from an already-enhanced record, without any LLM call
/// and without storing an artifact.
pub async fn handle_render(
    Json(record): Json<ContentRecord>,
) -> Result<Json<RenderResumeResponse>, AppError> {
    let built = build_blocking(record).await?;
    Ok(Json(RenderResumeResponse {
        page_count: built.page_count,
        size_bytes: built.bytes.len(),
        preview: built.preview,
        nodes: built.nodes,
    }))
}

/// GET /api/v1/resumes/:username/pdf
/// Serves the stored artifact for a user.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    let username = valid_username(&username)?;
    let filename = artifact_filename(username);
    let path = state.config.output_dir.join(&filename);

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("no generated resume for '{username}'")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn build_blocking(record: ContentRecord) -> Result<BuiltDocument, AppError> {
    tokio::task::spawn_blocking(move || document::build_document(&record))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("document build task failed: {e}")))?
        .map_err(AppError::from)
}

/// Usernames key artifact paths, so they must not traverse directories.
fn valid_username(username: &str) -> Result<&str, AppError> {
    let name = username.trim();
    let ok = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(name)
    } else {
        Err(AppError::Validation(format!(
            "invalid username '{username}'"
        )))
    }
}

fn artifact_filename(username: &str) -> String {
    format!("generated_resume_{username}.pdf")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::enhance::ContentEnhancer;
    use crate::models::profile::ExperienceInput;
    use crate::routes::build_router;

    struct StubEnhancer;

    #[async_trait]
    impl ContentEnhancer for StubEnhancer {
        async fn enhance_experience(&self, exp: &ExperienceInput) -> Result<String, AppError> {
            Ok(format!("* Enhanced {}", exp.company))
        }

        async fn enhance_summary(
            &self,
            summary: &str,
            _skills: &[String],
        ) -> Result<String, AppError> {
            Ok(summary.to_string())
        }

        async fn enhance_skills(&self, skills: &[String]) -> Result<String, AppError> {
            Ok(skills.join(" | "))
        }
    }

    fn test_state(output_dir: &std::path::Path) -> AppState {
        AppState {
            enhancer: Arc::new(StubEnhancer),
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                output_dir: output_dir.to_path_buf(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8_lossy(&bytes).to_string()
    }

    #[tokio::test]
    async fn test_render_endpoint_returns_preview() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));
        let record = serde_json::json!({
            "name": "Jane Doe",
            "email": "j@x.com",
            "experience": [{
                "company": "Acme",
                "position": "Eng",
                "duration": "2020-2022",
                "achievements": "*Built X\n*Shipped Y"
            }],
            "skills": "Python | Go"
        });
        let resp = app
            .oneshot(post_json("/api/v1/resumes/render", record.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Acme - Eng"));
        assert!(body.contains("\"page_count\":1"));
    }

    #[tokio::test]
    async fn test_render_endpoint_rejects_malformed_shape() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));
        // experience must be an array of entries, not a string
        let resp = app
            .oneshot(post_json(
                "/api/v1/resumes/render",
                r#"{"experience": "not-a-list"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_generate_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));
        let req = serde_json::json!({
            "username": "jane",
            "profile": {
                "personal_info": { "name": "Jane Doe" },
                "experience": [{ "company": "Acme", "position": "Eng" }]
            }
        });
        let resp = app
            .oneshot(post_json("/api/v1/resumes", req.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let artifact = dir.path().join("generated_resume_jane.pdf");
        let bytes = std::fs::read(&artifact).expect("artifact must exist");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_generate_rejects_path_traversal_username() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));
        let req = serde_json::json!({
            "username": "../../etc/passwd",
            "profile": {}
        });
        let resp = app
            .oneshot(post_json("/api/v1/resumes", req.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_download_missing_artifact_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()));
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/resumes/ghost/pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_download_roundtrip_after_generate() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let generate = build_router(state.clone());
        let req = serde_json::json!({
            "username": "jane",
            "profile": { "personal_info": { "name": "Jane Doe" } }
        });
        let resp = generate
            .oneshot(post_json("/api/v1/resumes", req.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let download = build_router(state);
        let resp = download
            .oneshot(
                Request::builder()
                    .uri("/api/v1/resumes/jane/pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
    }
}
