//! Shared fixtures: a mock authentication service, an in-memory store and
//! helpers for driving the router.

#![allow(dead_code)]

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;
use std::time::Duration;

use adapters::{HttpAuthService, InMemoryStore};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use backend::auth::SessionValidator;
use backend::config::Config;
use backend::database::{models::Course, queries};
use backend::state::{AppState, SharedState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const AUTH_TIMEOUT: Duration = Duration::from_millis(200);

pub struct TestApp {
    pub auth: MockServer,
    pub store: Arc<InMemoryStore>,
    pub state: SharedState,
}

impl TestApp {
    pub async fn start() -> Self {
        Self::with_vars(&[]).await
    }

    pub async fn with_vars(vars: &[(&str, &str)]) -> Self {
        let auth = MockServer::start().await;
        let mut owned: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        owned.insert("AUTH_SERVER_URL".into(), auth.uri());

        let config = config_from(owned);
        let client =
            HttpAuthService::new(&config.auth_base_url, config.session_cookie.clone(), AUTH_TIMEOUT)
                .unwrap();

        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(
            config,
            store.clone(),
            SessionValidator::new(Arc::new(client)),
        );

        Self { auth, store, state }
    }

    pub fn router(&self) -> Router {
        backend::app(self.state.clone())
    }

    /// Answers `GET /api/auth/status` for `token` with `body`.
    pub async fn session(&self, token: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/api/auth/status"))
            .and(header_matcher("cookie", format!("sessionid={token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.auth)
            .await;
    }

    pub async fn student_session(&self, token: &str, user_id: &str) {
        self.session(
            token,
            json!({
                "authenticated": true,
                "userId": user_id,
                "email": format!("{user_id}@example.edu"),
                "fullName": "Student",
                "role": "student"
            }),
        )
        .await;
    }

    pub async fn professor_session(&self, token: &str, user_id: &str) {
        self.session(
            token,
            json!({
                "authenticated": true,
                "userId": user_id,
                "email": format!("{user_id}@example.edu"),
                "fullName": "Professor",
                "role": "professor"
            }),
        )
        .await;
    }

    pub async fn seed_course(&self, name: &str) -> String {
        queries::insert_course(
            self.store.as_ref(),
            &Course {
                name: name.into(),
                professor_id: "p0".into(),
                created_at: "2024-01-10T12:00:00.000Z".into(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, cookie, None).await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        cookie: Option<&str>,
        form: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let body = serde_urlencoded::to_string(form).unwrap();
        self.send(Method::POST, uri, cookie, Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        form: Option<String>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = cookie {
            request = request.header(header::COOKIE, format!("sessionid={token}"));
        }

        let body = match form {
            Some(form) => {
                request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form)
            }
            None => Body::empty(),
        };

        let response = self
            .router()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, value)
    }
}

pub fn config_from(owned: HashMap<String, String>) -> Config {
    Config::from_reader(move |key: &str| owned.get(key).cloned().ok_or(VarError::NotPresent))
        .unwrap()
}
