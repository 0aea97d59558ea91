#![allow(dead_code)]

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use musicstore::configuration::{
    AuthSettings, DatabaseSettings, Environment, Settings, StorageBackend,
};
use musicstore::db::Repositories;
use serde_json::{json, Value};
use std::net::TcpListener;

pub const AUTH_DOMAIN: &str = "musicstore.auth0.com";
pub const AUDIENCE: &str = "musicstore";
pub const KEY_ID: &str = "musicstore-test-key";

const PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/private_key.pem");

pub const CUSTOMER_PERMISSIONS: [&str; 2] = ["get:albums", "get:artists"];
pub const MANAGER_PERMISSIONS: [&str; 8] = [
    "delete:albums",
    "delete:artists",
    "get:albums",
    "get:artists",
    "patch:albums",
    "patch:artists",
    "post:albums",
    "post:artists",
];

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

pub fn test_settings() -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        environment: Environment::Test,
        storage: StorageBackend::Memory,
        database: DatabaseSettings {
            url: String::new(),
            test_url: String::new(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        },
        auth: AuthSettings {
            domain: AUTH_DOMAIN.to_string(),
            audience: AUDIENCE.to_string(),
            jwks_url: None,
            jwks_path: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/jwks.json").to_string()),
            jwks_cache_ttl_secs: 300,
        },
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_settings(), Repositories::memory()).await
}

pub async fn spawn_app_with(settings: Settings, repositories: Repositories) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = musicstore::startup::run(listener, repositories, settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Claims the way the identity provider issues them for this API.
pub fn claims_with(permissions: &[&str]) -> Value {
    json!({
        "iss": format!("https://{}/", AUTH_DOMAIN),
        "sub": "auth0|5ecac5c792dce80c6f1841b9",
        "aud": AUDIENCE,
        "iat": now(),
        "exp": now() + 3600,
        "scope": "",
        "permissions": permissions,
    })
}

pub fn expired(mut claims: Value) -> Value {
    claims["exp"] = json!(now() - 3600);
    claims
}

pub fn mint_token(claims: &Value) -> String {
    mint_token_with_kid(claims, Some(KEY_ID))
}

pub fn mint_token_with_kid(claims: &Value, kid: Option<&str>) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY).expect("Fixture key is not a valid RSA PEM");

    encode(&header, claims, &key).expect("Failed to sign token")
}

pub fn customer_token() -> String {
    mint_token(&claims_with(&CUSTOMER_PERMISSIONS))
}

pub fn manager_token() -> String {
    mint_token(&claims_with(&MANAGER_PERMISSIONS))
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, token: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn patch_json(&self, path: &str, token: &str, body: &Value) -> reqwest::Response {
        self.client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a row with a manager token and returns its formatted JSON.
    pub async fn create(&self, path: &str, key: &str, body: Value) -> Value {
        let response = self.post_json(path, &manager_token(), &body).await;
        assert_eq!(response.status().as_u16(), 201, "creating {body}");

        let mut body: Value = response.json().await.expect("Response should be valid JSON");
        body[key].take()
    }
}
