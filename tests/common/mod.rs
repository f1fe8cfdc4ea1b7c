#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use recipebox::config::{Config, DatabaseConfig, ObservabilityConfig, ServerConfig};
use recipebox_user::TokenConfig;
use serde_json::Value;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

pub const PASSWORD: &str = "testpass123";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: TokenConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            issuer: "recipebox".to_string(),
            audience: "recipebox-api".to_string(),
            expiration_days: 1,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub state: recipebox::AppState,
}

impl TestApp {
    pub async fn new() -> TestApp {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);

        // A single connection keeps every query on the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create test database");

        let mut conn = pool.acquire().await.expect("Failed to acquire connection");
        recipebox_db::migrator::<sqlx::Sqlite>()
            .unwrap()
            .run(&mut conn, &Plan::apply_all())
            .await
            .expect("Failed to run migrations");
        drop(conn);

        let state = recipebox::single_pool_state(test_config(), pool.clone());

        TestApp {
            router: recipebox::router(state.clone()),
            pool,
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request(Method::POST, uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request(Method::PUT, uri, token, Some(body))).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request(Method::PATCH, uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::DELETE, uri, token, None)).await
    }

    /// Registers a user directly and returns a token for it.
    pub async fn create_user(&self, email: &str) -> String {
        self.state
            .user_command
            .register(recipebox_user::RegisterInput {
                email: email.to_owned(),
                password: PASSWORD.to_owned(),
                name: "Test name".to_owned(),
            })
            .await
            .unwrap();

        self.state
            .user_command
            .login(recipebox_user::LoginInput {
                email: email.to_owned(),
                password: PASSWORD.to_owned(),
            })
            .await
            .unwrap()
    }

    pub async fn create_ingredient(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .post(
                "/recipe/ingredients/",
                Some(token),
                serde_json::json!({ "name": name }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_owned()
    }

    pub async fn create_tag(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .post("/recipe/tags/", Some(token), serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_owned()
    }

    pub async fn create_recipe(
        &self,
        token: &str,
        title: &str,
        ingredients: &[&str],
        tags: &[&str],
    ) -> String {
        let (status, body) = self
            .post(
                "/recipe/recipes/",
                Some(token),
                serde_json::json!({
                    "title": title,
                    "time_minutes": 10,
                    "price": "5.00",
                    "ingredients": ingredients,
                    "tags": tags,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_owned()
    }
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}
