use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn register_returns_public_fields_only() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/register"))
        .json(&serde_json::json!({
            "name": "Ali",
            "email": "a@x.com",
            "password": "secret123",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert!(json["user"]["id"].is_string());
    assert_eq!(json["user"]["name"], "Ali");
    assert_eq!(json["user"]["email"], "a@x.com");
    assert!(json["user"].get("password").is_none());
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn register_with_missing_field_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/register"))
        .json(&serde_json::json!({
            "name": "Ali",
            "email": "a@x.com",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn register_duplicate_email_fails() {
    let app = TestApp::spawn().await;
    app.register_user("Ali", "dup@x.com", "secret123").await;

    // Same email, different name and password.
    let resp = app
        .client
        .post(app.url("/register"))
        .json(&serde_json::json!({
            "name": "Reza",
            "email": "dup@x.com",
            "password": "other456",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn stored_password_is_hashed() {
    let app = TestApp::spawn().await;
    app.register_user("Ali", "a@x.com", "secret123").await;

    let stored = app
        .store
        .read(|doc| doc.users[0].password.clone())
        .await;
    assert_ne!(stored, "secret123");
}

#[tokio::test]
async fn login_with_valid_credentials_succeeds() {
    let app = TestApp::spawn().await;
    let id = app.register_user("Ali", "a@x.com", "secret123").await;

    let resp = app
        .client
        .post(app.url("/login"))
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "secret123",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["user"]["id"], id.as_str());
    assert_eq!(json["user"]["email"], "a@x.com");
    assert!(json["user"].get("password").is_none());
}

#[tokio::test]
async fn login_failures_use_one_message_for_both_causes() {
    let app = TestApp::spawn().await;
    app.register_user("Ali", "a@x.com", "secret123").await;

    let wrong_password = app
        .client
        .post(app.url("/login"))
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "wrong",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status().as_u16(), 401);
    let wrong_password: Value = wrong_password.json().await.unwrap();

    let unknown_email = app
        .client
        .post(app.url("/login"))
        .json(&serde_json::json!({
            "email": "nobody@x.com",
            "password": "secret123",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_email.status().as_u16(), 401);
    let unknown_email: Value = unknown_email.json().await.unwrap();

    assert_eq!(wrong_password["message"], unknown_email["message"]);
}

#[tokio::test]
async fn login_with_missing_field_fails() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/login"))
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}
