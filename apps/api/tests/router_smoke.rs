use std::io::{Cursor, Write};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use skillmatch::config::Config;
use skillmatch::{build_router, AppState};

fn app() -> Router {
    build_router(AppState::new(Config::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["vocabulary_size"].as_u64().unwrap() > 100);
}

#[tokio::test]
async fn vocabulary_is_grouped() {
    let (status, body) = send(&app(), get("/api/v1/skills/vocabulary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"][0]["category"], "language");
    assert_eq!(body["categories"][0]["skills"][0], "JavaScript");
}

#[tokio::test]
async fn extract_respects_word_boundaries() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/v1/skills/extract",
            json!({"text": "JavaScript and Node.js on AWS"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skills"], json!(["JavaScript", "Node.js", "AWS"]));
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn score_by_names() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/v1/match/score",
            json!({"required": ["React", "Python"], "candidate": ["react"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 50);
    assert_eq!(body["matching_skills"], json!(["React"]));
    assert_eq!(body["missing_skills"], json!(["Python"]));
}

#[tokio::test]
async fn score_with_unknown_skill_is_rejected() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/v1/match/score",
            json!({"required": ["Cobol"], "candidate": []}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn screening_lifecycle() {
    let app = app();
    let (status, screening) = send(
        &app,
        post_json(
            "/api/v1/screenings",
            json!({
                "job_description": "React, Node.js, AWS and Python",
                "candidates": [
                    {"name": "Bea", "resume_text": "React developer"},
                    {"name": "Ana", "resume_text": "React, Node.js, AWS, Python"}
                ]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(screening["candidates"][0]["name"], "Ana");
    assert_eq!(screening["candidates"][0]["rank"], 1);
    assert_eq!(screening["candidates"][0]["tier"], "excellent");

    let id = screening["id"].as_str().unwrap();
    let (status, loaded) = send(&app, get(&format!("/api/v1/screenings/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded["id"], screening["id"]);

    let (status, analytics) = send(&app, get(&format!("/api/v1/screenings/{id}/analytics"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analytics["total_candidates"], 2);
    assert_eq!(analytics["top_candidate"]["name"], "Ana");

    let ids = json!({"candidate_ids": [
        screening["candidates"][0]["candidate_id"],
        screening["candidates"][1]["candidate_id"]
    ]});
    let (status, comparison) = send(
        &app,
        post_json(&format!("/api/v1/screenings/{id}/compare"), ids),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comparison["shared_skills"], json!(["React"]));
}

#[tokio::test]
async fn unknown_screening_is_not_found() {
    let (status, body) = send(
        &app(),
        get("/api/v1/screenings/00000000-0000-0000-0000-000000000000"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn screening_without_candidates_is_rejected() {
    let (status, _) = send(
        &app(),
        post_json(
            "/api/v1/screenings",
            json!({"job_description": "Rust", "candidates": []}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

const BOUNDARY: &str = "skillmatch-boundary";

fn multipart_body(parts: &[(&str, Option<&str>, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, content_type, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match file_name {
            Some(file) => format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file}\"\r\n"
            ),
            None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn post_multipart(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/screenings/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_text_resumes() {
    let body = multipart_body(&[
        ("job_description", None, "text/plain", b"Python and Docker"),
        ("resumes", Some("ana.txt"), "text/plain", b"Python, Docker, Kubernetes"),
        ("resumes", Some("bea.txt"), "text/plain", b"Docker only"),
    ]);
    let (status, screening) = send(&app(), post_multipart(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(screening["candidates"][0]["name"], "ana");
    assert_eq!(screening["candidates"][0]["result"]["score"], 100);
    assert_eq!(screening["candidates"][1]["name"], "bea");
}

fn docx_bytes(text: &str) -> Vec<u8> {
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body><w:p><w:r><w:t>{text}</w:t></w:r></w:p></w:body></w:document>"
    );
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[tokio::test]
async fn upload_docx_resume() {
    let resume = docx_bytes("Python, Docker and Kubernetes");
    let body = multipart_body(&[
        ("job_description", None, "text/plain", b"Python and Docker"),
        ("resumes", Some("ana.docx"), DOCX_MIME, resume.as_slice()),
    ]);
    let (status, screening) = send(&app(), post_multipart(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(screening["candidates"][0]["name"], "ana");
    assert_eq!(screening["candidates"][0]["result"]["score"], 100);
}

#[tokio::test]
async fn upload_legacy_doc_resume_fails_extraction() {
    let body = multipart_body(&[
        ("job_description", None, "text/plain", b"Python"),
        (
            "resumes",
            Some("ana.doc"),
            "application/msword",
            b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1",
        ),
    ]);
    let (status, body) = send(&app(), post_multipart(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");
}
