//! Router-level tests.
//!
//! Requests run through the full router with the session layer on the test store. Views
//! are rendered as JSON `{template, model}` so assertions can inspect the view model.

use std::{path::Path, sync::Arc};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use time::Duration;
use tower::ServiceExt;
use tower_sessions::{Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    middleware::session::AuthSession,
    router::router,
    service::news::StaticNewsProvider,
    state::AppState,
    view::{ViewError, ViewRenderer},
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod dashboard;

struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, template: &str, model: &Value) -> Result<String, ViewError> {
        Ok(json!({ "template": template, "model": model }).to_string())
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Test context with user tables and a router sharing its database and session store.
struct TestApp {
    test: TestContext,
    store: SqliteStore,
    router: Router,
    upload_dir: tempfile::TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let store = test.session_store().await.unwrap();
        let db = test.database().await.unwrap().clone();
        let upload_dir = tempfile::tempdir().unwrap();

        let state = AppState::new(
            db,
            Arc::new(JsonRenderer),
            Arc::new(StaticNewsProvider::at(
                Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            )),
            upload_dir.path().to_path_buf(),
        );
        let router = router(state).layer(SessionManagerLayer::new(store.clone()));

        Self {
            test,
            store,
            router,
            upload_dir,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    fn upload_dir(&self) -> &Path {
        self.upload_dir.path()
    }

    /// Creates a user and returns a cookie header value for a session logged in as them.
    async fn login(&self) -> (entity::user::Model, String) {
        let user = factory::user::create_user(self.db()).await.unwrap();
        let cookie = self.login_as(user.id).await;
        (user, cookie)
    }

    async fn login_as(&self, user_id: i32) -> String {
        let session = Session::new(
            None,
            Arc::new(self.store.clone()),
            Some(Expiry::OnInactivity(Duration::days(7))),
        );
        AuthSession::new(&session)
            .set_user_id(user_id)
            .await
            .unwrap();
        session.save().await.unwrap();

        format!("id={}", session.id().unwrap())
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        self.send(request(Method::GET, uri, cookie, Body::empty()))
            .await
    }
}

fn request(method: Method, uri: &str, cookie: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(body).unwrap()
}

fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut request = request(method, uri, cookie, Body::from(body.to_string()));
    request.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    request
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn assert_redirect(response: &Response, to: &str) {
    assert!(
        response.status().is_redirection(),
        "expected redirect, got {}",
        response.status()
    );
    assert_eq!(location(response), to);
}
