use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use pledger_api::{build_router, state::AppState};
use pledger_config::{AppSettings, Settings, StoreSettings};
use pledger_store::JsonStore;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A running test server backed by a store file in its own temp directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub base_url: String,
    pub store: Arc<JsonStore>,
    pub store_path: PathBuf,
    pub client: reqwest::Client,
    _store_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store_path = store_dir.path().join("data.json");

        let settings = Settings {
            app: AppSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            store: StoreSettings {
                path: store_path.to_string_lossy().into_owned(),
            },
        };

        let store = Arc::new(JsonStore::new(&settings.store.path));
        let app_state = AppState::new(store.clone(), settings);
        let app = build_router(app_state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let base_url = format!("http://{}", addr);
        let client = reqwest::Client::new();

        Self {
            addr,
            base_url,
            store,
            store_path,
            client,
            _store_dir: store_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a user and return its id.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/register"))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);

        let json: serde_json::Value = resp.json().await.unwrap();
        json["user"]["id"].as_str().unwrap().to_string()
    }

    /// Create a challenge owned by `user_id` and return its id.
    pub async fn create_challenge(&self, user_id: &str, duration: i64, penalty: i64) -> String {
        let resp = self
            .client
            .post(self.url("/challenges"))
            .json(&serde_json::json!({
                "userId": user_id,
                "title": "No sugar",
                "duration": duration,
                "penalty": penalty,
                "charityId": "charity1",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);

        let json: serde_json::Value = resp.json().await.unwrap();
        json["challenge"]["id"].as_str().unwrap().to_string()
    }

    /// Record one penalty on behalf of `recorded_by`, asserting success.
    pub async fn record_penalty(&self, challenge_id: &str, recorded_by: &str) -> serde_json::Value {
        let resp = self
            .client
            .post(self.url(&format!("/challenges/{challenge_id}/penalties")))
            .json(&serde_json::json!({ "recordedBy": recorded_by }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        resp.json().await.unwrap()
    }
}
