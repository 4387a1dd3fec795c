mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::read_json;

fn upload_request(method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }

    builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("failed to build request")
}

fn completion(mime_type: &str, size: u64) -> Value {
    json!({
        "file": {
            "name": "cedula.png",
            "size": size,
            "type": mime_type,
            "url": "https://files.example.com/f/cedula.png"
        },
        "metadata": {
            "documentType": "Cedula",
            "purpose": "Employment"
        }
    })
}

#[tokio::test]
async fn test_upload_requires_user() -> anyhow::Result<()> {
    let app = common::test_app(common::test_pool().await?);

    let resp = app.clone().oneshot(upload_request(
        "POST",
        "/api/uploads/complete",
        None,
        Some(completion("image/png", 1024)),
    )).await?;
    let (status, error) = read_json(resp).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error, json!({ "error": "Unauthorized" }));

    let resp = app.oneshot(upload_request("GET", "/api/uploads", Some("   "), None)).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_upload_is_recorded_for_user() -> anyhow::Result<()> {
    let app = common::test_app(common::test_pool().await?);

    let resp = app.clone().oneshot(upload_request(
        "POST",
        "/api/uploads/complete",
        Some("user_abc"),
        Some(completion("image/png", 2048)),
    )).await?;
    let (status, upload) = read_json(resp).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(upload["fileName"], "cedula.png");
    assert_eq!(upload["fileSize"], 2048);
    assert_eq!(upload["mimeType"], "image/png");
    assert_eq!(upload["fileUrl"], "https://files.example.com/f/cedula.png");
    assert_eq!(upload["uploadedBy"], "user_abc");
    assert_eq!(upload["status"], "approved");
    assert_eq!(upload["documentType"], "Cedula");
    assert_eq!(upload["purpose"], "Employment");
    assert_eq!(upload["requestType"], "document");
    assert!(upload["email"].is_null());

    let resp = app.clone().oneshot(upload_request("GET", "/api/uploads", Some("user_abc"), None)).await?;
    let (status, mine) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine, json!([upload]));

    // Other users do not see it
    let resp = app.oneshot(upload_request("GET", "/api/uploads", Some("someone_else"), None)).await?;
    let (_, theirs) = read_json(resp).await;
    assert_eq!(theirs, json!([]));

    Ok(())
}

#[tokio::test]
async fn test_upload_request_type_is_always_document() -> anyhow::Result<()> {
    let app = common::test_app(common::test_pool().await?);

    let mut body = completion("application/pdf", 1024);
    body["metadata"]["requestType"] = json!("other");

    let resp = app.oneshot(upload_request("POST", "/api/uploads/complete", Some("user_abc"), Some(body))).await?;
    let (status, upload) = read_json(resp).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(upload["requestType"], "document");

    Ok(())
}

#[tokio::test]
async fn test_upload_limits_are_enforced() -> anyhow::Result<()> {
    let app = common::test_app(common::test_pool().await?);

    let too_big_image = 4 * 1024 * 1024 + 1;
    let resp = app.clone().oneshot(upload_request(
        "POST",
        "/api/uploads/complete",
        Some("user_abc"),
        Some(completion("image/jpeg", too_big_image)),
    )).await?;
    let (status, error) = read_json(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": "File too large: image files may be at most 4MB" }));

    // The same size is fine for a PDF
    let resp = app.clone().oneshot(upload_request(
        "POST",
        "/api/uploads/complete",
        Some("user_abc"),
        Some(completion("application/pdf", too_big_image)),
    )).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(upload_request(
        "POST",
        "/api/uploads/complete",
        Some("user_abc"),
        Some(completion("application/zip", 10)),
    )).await?;
    let (status, error) = read_json(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error,
        json!({ "error": "Unsupported file type: application/zip. Allowed: images and PDF" })
    );

    Ok(())
}

#[tokio::test]
async fn test_upload_rejects_unknown_status() -> anyhow::Result<()> {
    let app = common::test_app(common::test_pool().await?);

    let mut body = completion("image/png", 10);
    body["metadata"]["status"] = json!("lost");

    let resp = app.oneshot(upload_request(
        "POST",
        "/api/uploads/complete",
        Some("user_abc"),
        Some(body),
    )).await?;
    let (status, error) = read_json(resp).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].as_str().unwrap().starts_with("Invalid upload payload"));

    Ok(())
}
