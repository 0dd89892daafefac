mod common;

use common::{png_fixture, TestApp};
use mindmap_service::services::providers::mock::MockReply;
use reqwest::multipart;
use reqwest::Client;

fn image_form(bytes: Vec<u8>, name: &str) -> multipart::Form {
    multipart::Form::new().part(
        "file",
        multipart::Part::bytes(bytes)
            .file_name(name.to_string())
            .mime_str("image/png")
            .unwrap(),
    )
}

async fn post_analyze(client: &Client, address: &str, form: multipart::Form) -> reqwest::Response {
    client
        .post(format!("{}/analyze-note", address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn valid_upload_returns_mindmap_tree() {
    let app = TestApp::spawn(MockReply::EchoImageSize).await;
    let client = Client::new();

    let response = post_analyze(&client, &app.address, image_form(png_fixture(16, 16), "note.png")).await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["label"], "note 16x16");
    assert!(body["children"].is_array());
    assert!(body.get("error").is_none(), "success body must not carry an error key");
}

#[tokio::test]
async fn non_image_upload_reports_error_body() {
    let app = TestApp::spawn(MockReply::EchoImageSize).await;
    let client = Client::new();

    let response = post_analyze(
        &client,
        &app.address,
        image_form(b"just some plain text bytes".to_vec(), "note.txt"),
    )
    .await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());
    assert!(body.get("label").is_none(), "error body must not carry tree fields");
}

#[tokio::test]
async fn empty_upload_reports_error_body() {
    let app = TestApp::spawn(MockReply::EchoImageSize).await;
    let client = Client::new();

    let response =
        post_analyze(&client, &app.address, image_form(Vec::new(), "empty.png")).await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unparseable_model_output_reports_error_body() {
    let app = TestApp::spawn(MockReply::Fixed(
        "Here is your mindmap: {not valid json".to_string(),
    ))
    .await;
    let client = Client::new();

    let response = post_analyze(&client, &app.address, image_form(png_fixture(8, 8), "note.png")).await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn provider_failure_reports_error_body() {
    let app = TestApp::spawn(MockReply::Fail("quota exceeded".to_string())).await;
    let client = Client::new();

    let response = post_analyze(&client, &app.address, image_form(png_fixture(8, 8), "note.png")).await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let message = body["error"].as_str().expect("error must be a string");
    assert!(message.contains("quota exceeded"));
}

#[tokio::test]
async fn concurrent_uploads_do_not_cross_contaminate() {
    let app = TestApp::spawn(MockReply::EchoImageSize).await;
    let client = Client::new();

    let (small, large) = tokio::join!(
        post_analyze(&client, &app.address, image_form(png_fixture(8, 8), "small.png")),
        post_analyze(&client, &app.address, image_form(png_fixture(32, 32), "large.png")),
    );

    let small_body: serde_json::Value = small.json().await.expect("Failed to parse JSON");
    let large_body: serde_json::Value = large.json().await.expect("Failed to parse JSON");

    assert_eq!(small_body["label"], "note 8x8");
    assert_eq!(large_body["label"], "note 32x32");
}

#[tokio::test]
async fn strict_mode_maps_bad_upload_to_400() {
    let app = TestApp::spawn_strict(MockReply::EchoImageSize).await;
    let client = Client::new();

    let response = post_analyze(
        &client,
        &app.address,
        image_form(b"not an image".to_vec(), "note.txt"),
    )
    .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn strict_mode_maps_unparseable_model_output_to_502() {
    let app = TestApp::spawn_strict(MockReply::Fixed("{broken".to_string())).await;
    let client = Client::new();

    let response = post_analyze(&client, &app.address, image_form(png_fixture(8, 8), "note.png")).await;

    assert_eq!(response.status().as_u16(), 502);
}

#[tokio::test]
async fn strict_mode_still_returns_tree_on_success() {
    let app = TestApp::spawn_strict(MockReply::EchoImageSize).await;
    let client = Client::new();

    let response = post_analyze(&client, &app.address, image_form(png_fixture(16, 16), "note.png")).await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["label"], "note 16x16");
}
