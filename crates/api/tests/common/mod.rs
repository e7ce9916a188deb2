//! Shared helpers for HTTP-level integration tests.
//!
//! Every test gets its own SQLite file and poster directory inside a
//! `TempDir`, and drives the production router through `oneshot`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use ymdb_api::auth::jwt::{generate_access_token, JwtConfig};
use ymdb_api::auth::password::hash_password;
use ymdb_api::config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use ymdb_api::router::build_app_router;
use ymdb_api::state::AppState;
use ymdb_core::blob::LocalBlobStore;
use ymdb_core::entity::{NewActor, NewAdmin, NewDirector, NewMovie, NewRecord, NewUser};
use ymdb_core::roles::Tier;
use ymdb_core::types::DbId;
use ymdb_db::writes::{InsertedRecord, WriteOrchestrator};
use ymdb_db::{create_pool, run_migrations, DbPool};

pub const TEST_PASSWORD: &str = "popcorn_2024";

/// 1x1 PNG signature plus the start of an IHDR chunk; enough for format sniffing.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

/// Build a test `ServerConfig` rooted in `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: format!("sqlite://{}", dir.path().join("ymdb.db").display()),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        poster_dir: dir.path().join("posters"),
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

pub struct TestApp {
    _dir: TempDir,
    pub pool: DbPool,
    pub config: ServerConfig,
    pub app: Router,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let pool = create_pool(&config.database_url).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let state = AppState {
            pool: pool.clone(),
            config: Arc::new(config.clone()),
            blob_store: Arc::new(LocalBlobStore::new(config.poster_dir.clone())),
        };
        let app = build_app_router(state, &config);

        Self {
            _dir: dir,
            pool,
            config,
            app,
        }
    }

    pub fn poster_dir(&self) -> PathBuf {
        self.config.poster_dir.clone()
    }

    pub fn token(&self, uid: DbId, tier: Tier) -> String {
        generate_access_token(uid, tier, &self.config.jwt).unwrap()
    }

    // -----------------------------------------------------------------------
    // Callers
    // -----------------------------------------------------------------------

    /// A registered user with no admin row, plus a token.
    pub async fn user(&self, u_name: &str) -> (DbId, String) {
        let uid = seed_user(&self.pool, u_name, None).await;
        (uid, self.token(uid, Tier::User))
    }

    /// A user whose admin position is `moderator`, plus a token.
    pub async fn moderator(&self, u_name: &str) -> (DbId, String) {
        let uid = seed_user(&self.pool, u_name, None).await;
        seed_admin(&self.pool, uid, "moderator").await;
        (uid, self.token(uid, Tier::Moderator))
    }

    /// A full admin, plus a token.
    pub async fn admin(&self, u_name: &str) -> (DbId, String) {
        let uid = seed_user(&self.pool, u_name, None).await;
        seed_admin(&self.pool, uid, "chief").await;
        (uid, self.token(uid, Tier::Admin))
    }

    // -----------------------------------------------------------------------
    // Requests
    // -----------------------------------------------------------------------

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let request = authorized(Request::builder().method(Method::GET).uri(uri), token)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        token: Option<&str>,
        fields: &[(&str, &str)],
    ) -> Response<Body> {
        let request = authorized(Request::builder().method(Method::POST).uri(uri), token)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form_encode(fields)))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(
        &self,
        uri: &str,
        token: Option<&str>,
        parts: &[Part<'_>],
    ) -> Response<Body> {
        let (content_type, body) = multipart_body(parts);
        let request = authorized(Request::builder().method(Method::POST).uri(uri), token)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }
}

fn authorized(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Body encoders
// ---------------------------------------------------------------------------

fn form_encode(fields: &[(&str, &str)]) -> String {
    fn encode(s: &str) -> String {
        s.bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    (b as char).to_string()
                }
                b' ' => "+".to_string(),
                other => format!("%{other:02X}"),
            })
            .collect()
    }
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// One part of a `multipart/form-data` body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        bytes: &'a [u8],
    },
}

const BOUNDARY: &str = "ymdb-test-boundary-7d1f";

fn multipart_body(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Insert a user, hashing `password` when given.
pub async fn seed_user(pool: &DbPool, u_name: &str, password: Option<&str>) -> DbId {
    let user = NewUser {
        u_name: u_name.to_string(),
        email: format!("{u_name}@example.com"),
        password_hash: password.map(|p| hash_password(p).unwrap()),
    };
    match WriteOrchestrator::insert(pool, &NewRecord::User(user)).await.unwrap() {
        InsertedRecord::User(u) => u.uid,
        other => panic!("unexpected echo {other:?}"),
    }
}

pub async fn seed_admin(pool: &DbPool, uid: DbId, position: &str) {
    let admin = NewAdmin {
        uid,
        position: position.to_string(),
    };
    WriteOrchestrator::insert(pool, &NewRecord::Admin(admin))
        .await
        .unwrap();
}

pub async fn seed_director(pool: &DbPool, u_name: &str, given_name: &str) -> DbId {
    let uid = seed_user(pool, u_name, None).await;
    let director = NewDirector {
        uid,
        famous_for: None,
        given_name: given_name.to_string(),
        date_of_birth: 0,
    };
    WriteOrchestrator::insert(pool, &NewRecord::Director(director))
        .await
        .unwrap();
    uid
}

pub async fn seed_actor(pool: &DbPool, u_name: &str, name: &str) -> DbId {
    let uid = seed_user(pool, u_name, None).await;
    let actor = NewActor {
        uid,
        name: name.to_string(),
        date_of_birth: 0,
    };
    WriteOrchestrator::insert(pool, &NewRecord::Actor(actor))
        .await
        .unwrap();
    uid
}

pub async fn seed_movie(pool: &DbPool, title: &str, entered_by: DbId) -> DbId {
    let movie = NewMovie {
        director_uid: None,
        title: title.to_string(),
        release_date: None,
        entered_by,
    };
    match WriteOrchestrator::insert(pool, &NewRecord::Movie(movie)).await.unwrap() {
        InsertedRecord::Movie(m) => m.mid,
        other => panic!("unexpected echo {other:?}"),
    }
}
