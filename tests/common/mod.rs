#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use ong_portal::config::Config;
use ong_portal::flash::{self, Flash, FLASH_COOKIE};
use ong_portal::routes::create_routes;
use ong_portal::services::session::SESSION_COOKIE;
use ong_portal::state::AppState;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "senha-de-teste";

const BOUNDARY: &str = "----ong-portal-test-boundary";

/// A fully wired application over a throwaway SQLite file and upload
/// directory.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

/// A file part for [`TestApp::post_multipart`].
pub struct FilePart<'a> {
    pub field: &'a str,
    pub filename: &'a str,
    pub data: &'a [u8],
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        secret_key: "chave-de-teste".to_string(),
        admin_username: ADMIN_USER.to_string(),
        admin_password: ADMIN_PASS.to_string(),
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display()),
        upload_dir: dir.path().join("uploads"),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_upload_bytes: 16 * 1024 * 1024,
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = AppState::initialize(test_config(&dir))
            .await
            .expect("state should initialize");
        let router = create_routes(state.clone());
        Self {
            router,
            state,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    pub async fn post_multipart(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<FilePart<'_>>,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut body: Vec<u8> = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(file) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    file.field, file.filename
                )
                .as_bytes(),
            );
            body.extend_from_slice(file.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"));
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    /// Log in with the configured credentials and return a `Cookie` header
    /// value carrying the session.
    pub async fn login(&self) -> String {
        let response = self
            .post_form(
                "/login",
                &format!("username={ADMIN_USER}&password={ADMIN_PASS}"),
                None,
            )
            .await;
        let token = cookie_value(&response, SESSION_COOKIE).expect("login should set a session");
        format!("{SESSION_COOKIE}={token}")
    }
}

/// Value of a cookie set by the response, if any.
pub fn cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Flash messages queued by the response.
pub fn flashes(response: &Response<Body>) -> Vec<Flash> {
    cookie_value(response, FLASH_COOKIE)
        .map(|value| flash::decode(&value))
        .unwrap_or_default()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
