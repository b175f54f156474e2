use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn invitation_is_created_pending() {
    let app = TestApp::spawn().await;
    let ali = app.register_user("Ali", "a@x.com", "secret123").await;
    let sara = app.register_user("Sara", "s@x.com", "secret123").await;
    let challenge = app.create_challenge(&ali, 5, 1000).await;

    let resp = app
        .client
        .post(app.url("/invitations"))
        .json(&serde_json::json!({
            "fromUserId": ali,
            "toUserId": sara,
            "challengeId": challenge,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["invitation"]["status"], "pending");
    assert_eq!(json["invitation"]["fromUserId"], ali.as_str());
    assert_eq!(json["invitation"]["toUserId"], sara.as_str());
    assert!(json["invitation"]["createdAt"].is_string());
}

#[tokio::test]
async fn invitation_with_missing_field_fails() {
    let app = TestApp::spawn().await;
    let ali = app.register_user("Ali", "a@x.com", "secret123").await;

    let resp = app
        .client
        .post(app.url("/invitations"))
        .json(&serde_json::json!({ "fromUserId": ali }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn invitation_requires_existing_entities() {
    let app = TestApp::spawn().await;
    let ali = app.register_user("Ali", "a@x.com", "secret123").await;
    let sara = app.register_user("Sara", "s@x.com", "secret123").await;
    let challenge = app.create_challenge(&ali, 5, 1000).await;

    for body in [
        serde_json::json!({ "fromUserId": "ghost", "toUserId": sara, "challengeId": challenge }),
        serde_json::json!({ "fromUserId": ali, "toUserId": "ghost", "challengeId": challenge }),
        serde_json::json!({ "fromUserId": ali, "toUserId": sara, "challengeId": "ghost" }),
    ] {
        let resp = app
            .client
            .post(app.url("/invitations"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 404);
    }
}

#[tokio::test]
async fn list_returns_only_invitations_addressed_to_the_user() {
    let app = TestApp::spawn().await;
    let ali = app.register_user("Ali", "a@x.com", "secret123").await;
    let sara = app.register_user("Sara", "s@x.com", "secret123").await;
    let reza = app.register_user("Reza", "r@x.com", "secret123").await;
    let challenge = app.create_challenge(&ali, 5, 1000).await;

    for to in [&sara, &reza] {
        let resp = app
            .client
            .post(app.url("/invitations"))
            .json(&serde_json::json!({
                "fromUserId": ali,
                "toUserId": to,
                "challengeId": challenge,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let resp = app
        .client
        .get(app.url(&format!("/invitations/{sara}")))
        .send()
        .await
        .unwrap();
    let invitations: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(invitations.len(), 1);
    assert_eq!(invitations[0]["toUserId"], sara.as_str());
}
