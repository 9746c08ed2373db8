#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::TestServer;
use chrono::Utc;
use clap::Parser;
use jsonwebtoken::{EncodingKey, Header, encode};
use quill_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use quill_core::domain::authentication::entities::JwtClaim;
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub const JWT_SECRET: &str = "test-secret";

pub struct TestApp {
    pub server: TestServer,
    pub uploads: TempDir,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        let uploads = TempDir::new().unwrap();
        let upload_dir = uploads.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "quill-api",
            "--database-backend",
            "memory",
            "--upload-dir",
            upload_dir.as_str(),
            "--jwt-secret",
            JWT_SECRET,
            "--server-external-url",
            "http://cms.test",
        ]);

        let app_state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        TestApp { server, uploads }
    }
}

pub fn token(login: &str, authorities: &str) -> String {
    let claims = JwtClaim {
        sub: login.to_string(),
        user_id: 7,
        auth: authorities.to_string(),
        exp: Utc::now().timestamp() + 3600,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}
