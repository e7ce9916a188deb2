//! HTTP-level tests for single-row entry: gating, decoding, validation and
//! constraint handling.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, seed_actor, seed_director, seed_movie, seed_user, TestApp, TEST_PASSWORD};
use serde_json::json;
use ymdb_db::repositories::{AdminRepo, MovieRepo, UserRepo};

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymous_entry_index_is_forbidden_with_details() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/entry", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["required_tier"], "moderator");
    assert_eq!(json["resource"], "/entry");
}

#[tokio::test]
async fn moderator_cannot_create_users() {
    let app = TestApp::spawn().await;
    let (_, token) = app.moderator("mod").await;

    let response = app
        .post_form(
            "/api/v1/entry/user",
            Some(&token),
            &[("u_name", "newbie"), ("email", "n@example.com"), ("password", "pw")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["required_tier"], "admin");
    assert!(UserRepo::find_credentials(&app.pool, "newbie").await.unwrap().is_none());
}

#[tokio::test]
async fn plain_user_cannot_enter_movies() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user("viewer").await;

    let response = app
        .post_form(
            "/api/v1/entry/movie",
            Some(&token),
            &[("title", "Heat"), ("release_date", "1995-12-15")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(MovieRepo::count(&app.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn gate_runs_before_body_is_read() {
    let app = TestApp::spawn().await;

    // Not a form body at all; a body-first check would answer 415.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/entry/actor")
        .header(CONTENT_TYPE, "application/octet-stream")
        .body(Body::from(vec![0xde, 0xad]))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_authorization_header_is_401() {
    let app = TestApp::spawn().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/entry")
        .header(AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Index and options
// ---------------------------------------------------------------------------

#[tokio::test]
async fn entry_index_lists_every_form() {
    let app = TestApp::spawn().await;
    let (_, token) = app.moderator("mod").await;

    let response = app.get("/api/v1/entry", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let forms = json["data"].as_array().unwrap();
    let kinds: Vec<&str> = forms.iter().map(|f| f["kind"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        ["user", "admin", "director", "actor", "movie", "review", "acted_in", "poster", "bulk"]
    );
    assert_eq!(forms[0]["required_tier"], "admin");
    assert_eq!(forms[6]["path"], "/entry/acted");
    assert_eq!(forms[4]["fields"], json!(["director_uid", "title", "release_date"]));
}

#[tokio::test]
async fn form_options_list_related_rows() {
    let app = TestApp::spawn().await;
    let (mod_uid, token) = app.moderator("mod").await;
    let director = seed_director(&app.pool, "kubrick", "Stanley").await;
    let actor = seed_actor(&app.pool, "nicholson", "Jack").await;
    let mid = seed_movie(&app.pool, "The Shining", mod_uid).await;

    let movie_opts = body_json(app.get("/api/v1/entry/movie", Some(&token)).await).await;
    assert_eq!(
        movie_opts["data"]["directors"],
        json!([{ "id": director, "label": "kubrick" }])
    );

    let acted_opts = body_json(app.get("/api/v1/entry/acted", Some(&token)).await).await;
    assert_eq!(acted_opts["data"]["movies"], json!([{ "id": mid, "label": "The Shining" }]));
    assert_eq!(acted_opts["data"]["actors"], json!([{ "id": actor, "label": "nicholson" }]));

    let review_opts = body_json(app.get("/api/v1/entry/review", Some(&token)).await).await;
    assert_eq!(review_opts["data"]["users"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Successful entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_creates_user_who_can_log_in() {
    let app = TestApp::spawn().await;
    let (_, token) = app.admin("boss").await;

    let response = app
        .post_form(
            "/api/v1/entry/user",
            Some(&token),
            &[
                ("u_name", "fresh_face"),
                ("email", "fresh@example.com"),
                ("password", TEST_PASSWORD),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "inserted new user successfully");
    assert_eq!(json["record"]["u_name"], "fresh_face");
    assert!(json["record"]["uid"].as_i64().unwrap() > 0);
    assert!(json["record"]["created_date"].as_i64().unwrap() > 0);
    assert!(json["record"].get("password").is_none());

    let login = app
        .post_json(
            "/api/v1/auth/login",
            json!({ "username": "fresh_face", "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
    assert_eq!(body_json(login).await["user"]["tier"], "user");
}

#[tokio::test]
async fn movie_is_entered_by_caller() {
    let app = TestApp::spawn().await;
    let (mod_uid, token) = app.moderator("mod").await;
    let director = seed_director(&app.pool, "lynch", "David").await;
    let director_s = director.to_string();

    let response = app
        .post_form(
            "/api/v1/entry/movie",
            Some(&token),
            &[
                ("director_uid", director_s.as_str()),
                ("title", "Eraserhead"),
                ("release_date", "1977-03-19"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["record"]["entered_by"], mod_uid);
    assert_eq!(json["record"]["director_uid"], director);
    assert_eq!(json["record"]["release_date"], 227_577_600);
}

#[tokio::test]
async fn acted_in_entry_reports_role() {
    let app = TestApp::spawn().await;
    let (mod_uid, token) = app.moderator("mod").await;
    let actor = seed_actor(&app.pool, "weaver", "Sigourney").await;
    let mid = seed_movie(&app.pool, "Alien", mod_uid).await;
    let (mid_s, actor_s) = (mid.to_string(), actor.to_string());

    let response = app
        .post_form(
            "/api/v1/entry/acted",
            Some(&token),
            &[
                ("mid", mid_s.as_str()),
                ("uid", actor_s.as_str()),
                ("character_role", "Ripley"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "inserted new role successfully");
    assert_eq!(json["record"], json!({ "mid": mid, "uid": actor, "character_role": "Ripley" }));
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_digit_id_is_validation_error_and_nothing_written() {
    let app = TestApp::spawn().await;
    let (_, token) = app.admin("boss").await;

    let response = app
        .post_form(
            "/api/v1/entry/admin",
            Some(&token),
            &[("uid", "12a"), ("position", "chief")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(AdminRepo::count(&app.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn prefix_match_is_not_enough() {
    let app = TestApp::spawn().await;
    let (_, token) = app.admin("boss").await;

    // A valid prefix followed by junk must not slip through.
    let response = app
        .post_form(
            "/api/v1/entry/user",
            Some(&token),
            &[("u_name", "okay_then!!"), ("email", "o@example.com"), ("password", "pw")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn bad_date_is_decode_error() {
    let app = TestApp::spawn().await;
    let (_, token) = app.moderator("mod").await;
    let uid = seed_user(&app.pool, "kurosawa", None).await;
    let uid_s = uid.to_string();

    let response = app
        .post_form(
            "/api/v1/entry/director",
            Some(&token),
            &[("uid", uid_s.as_str()), ("given_name", "Akira"), ("dob", "23/03/1910")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DECODE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("dob"));
}

#[tokio::test]
async fn missing_field_is_decode_error() {
    let app = TestApp::spawn().await;
    let (_, token) = app.moderator("mod").await;

    let response = app
        .post_form("/api/v1/entry/actor", Some(&token), &[("uid", "1"), ("name", "Toshiro")])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DECODE_ERROR");
    assert_eq!(json["error"], "missing field 'dob'");
}

#[tokio::test]
async fn missing_foreign_key_is_constraint_violation_every_time() {
    let app = TestApp::spawn().await;
    let (_, token) = app.admin("boss").await;

    for _ in 0..2 {
        let response = app
            .post_form(
                "/api/v1/entry/admin",
                Some(&token),
                &[("uid", "4242"), ("position", "deputy")],
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "CONSTRAINT_VIOLATION");
        assert!(json["error"].as_str().unwrap().starts_with("error inserting tuple"));
    }
    assert_eq!(AdminRepo::count(&app.pool).await.unwrap(), 1);
}
