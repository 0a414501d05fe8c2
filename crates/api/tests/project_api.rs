//! HTTP-level tests for project listing, fetch, related ranking and admin
//! CRUD.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_project, delete_auth, get, post_json, post_json_auth,
    put_json_auth, FakeHost, TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

/// login -> create -> fetch twice: the slug is derived and every fetch
/// counts as one view.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_create_and_view(pool: PgPool) {
    let app = common::build_test_app(pool);

    let login = post_json(app.clone(), "/api/admin/login", json!({ "password": TEST_PASSWORD })).await;
    assert_eq!(login.status(), StatusCode::OK);
    let token = body_json(login).await["token"].as_str().unwrap().to_string();

    let created = create_project(app.clone(), &token, json!({ "title": "My App" })).await;
    assert_eq!(created["slug"], "my-app");
    assert_eq!(created["views"], 0);
    assert_eq!(created["status"], "completed");

    let first = get(app.clone(), "/api/projects/my-app").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["views"], 1);

    let second = get(app, "/api/projects/my-app").await;
    assert_eq!(body_json(second).await["views"], 2);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_titles_get_suffixed_slugs(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let a = create_project(app.clone(), &token, json!({ "title": "My App" })).await;
    let b = create_project(app.clone(), &token, json!({ "title": "My App" })).await;
    let c = create_project(app, &token, json!({ "title": "My App", "slug": "My App" })).await;

    assert_eq!(a["slug"], "my-app");
    assert_eq!(b["slug"], "my-app-1");
    assert_eq!(c["slug"], "my-app-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_keeps_supplied_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let project = create_project(
        app,
        &token,
        json!({
            "title": "Ray Tracer",
            "short_description": "Weekend renderer",
            "tags": ["graphics", "graphics", " rust-lang "],
            "technologies": ["Rust"],
            "links": { "github": "https://github.com/example/rt" },
            "media": [{ "type": "image", "url": "https://cdn.test/rt.png" }],
            "featured": true,
            "status": "in-progress",
            "order": 4
        }),
    )
    .await;

    assert_eq!(project["short_description"], "Weekend renderer");
    assert_eq!(project["tags"], json!(["graphics", "rust-lang"]));
    assert_eq!(project["links"]["github"], "https://github.com/example/rt");
    assert_eq!(project["media"][0]["type"], "image");
    assert_eq!(project["featured"], true);
    assert_eq!(project["status"], "in-progress");
    assert_eq!(project["order"], 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_requires_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    let response = post_json_auth(app.clone(), "/api/admin/projects", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "title is required");

    let response =
        post_json_auth(app, "/api/admin/projects", json!({ "title": "   " }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_punctuation_only_title_falls_back(pool: PgPool) {
    let app = common::build_test_app(pool);
    let project = create_project(app, &admin_token(), json!({ "title": "!!!" })).await;
    assert_eq!(project["slug"], "project");
}

// ---------------------------------------------------------------------------
// Fetch / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_slug_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/projects/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/projects/related/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_and_sorting(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    create_project(
        app.clone(),
        &token,
        json!({ "title": "Second", "tags": ["web"], "technologies": ["Rust"], "order": 2 }),
    )
    .await;
    create_project(
        app.clone(),
        &token,
        json!({ "title": "First", "tags": ["cli"], "featured": true, "order": 1 }),
    )
    .await;

    let all = body_json(get(app.clone(), "/api/projects").await).await;
    let slugs: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["first", "second"]);

    let featured = body_json(get(app.clone(), "/api/projects?featured=true").await).await;
    assert_eq!(featured.as_array().unwrap().len(), 1);
    assert_eq!(featured[0]["slug"], "first");

    let by_tech = body_json(get(app.clone(), "/api/projects?technology=Rust").await).await;
    assert_eq!(by_tech.as_array().unwrap().len(), 1);
    assert_eq!(by_tech[0]["slug"], "second");

    let none = body_json(get(app.clone(), "/api/projects?tag=unknown").await).await;
    assert_eq!(none, json!([]));

    get(app.clone(), "/api/projects/second").await;
    let by_views = body_json(get(app, "/api/projects?sort_by=views").await).await;
    assert_eq!(by_views[0]["slug"], "second");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_related_ranking(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();

    create_project(
        app.clone(),
        &token,
        json!({ "title": "Target", "tags": ["A", "B"], "technologies": ["X"] }),
    )
    .await;
    create_project(
        app.clone(),
        &token,
        json!({ "title": "Twin", "tags": ["A", "B", "C"], "technologies": ["X", "Y"],
                "media": [{ "type": "image", "url": "https://cdn.test/twin.png" }] }),
    )
    .await;
    create_project(
        app.clone(),
        &token,
        json!({ "title": "Cousin", "tags": ["A"], "technologies": [] }),
    )
    .await;
    create_project(
        app.clone(),
        &token,
        json!({ "title": "Stranger", "tags": ["Z"], "technologies": ["Q"] }),
    )
    .await;

    let response = get(app, "/api/projects/related/target").await;
    assert_eq!(response.status(), StatusCode::OK);
    let related = body_json(response).await;
    let related = related.as_array().unwrap();

    assert_eq!(related.len(), 2);
    assert_eq!(related[0]["slug"], "twin");
    assert_eq!(related[0]["score"], 5);
    assert_eq!(related[0]["media"]["url"], "https://cdn.test/twin.png");
    assert_eq!(related[1]["slug"], "cousin");
    assert_eq!(related[1]["score"], 2);
    assert!(related[1]["media"].is_null());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_partial(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    let created = create_project(
        app.clone(),
        &token,
        json!({ "title": "Keep Me", "short_description": "unchanged", "tags": ["a"] }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{id}"),
        json!({ "featured": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["featured"], true);
    assert_eq!(updated["title"], "Keep Me");
    assert_eq!(updated["slug"], "keep-me");
    assert_eq!(updated["short_description"], "unchanged");
    assert_eq!(updated["tags"], json!(["a"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_change_regenerates_slug(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    let created = create_project(app.clone(), &token, json!({ "title": "Old Name" })).await;
    create_project(app.clone(), &token, json!({ "title": "New Name" })).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/admin/projects/{id}");

    // Same title: slug untouched.
    let same = put_json_auth(app.clone(), &uri, json!({ "title": "Old Name" }), &token).await;
    assert_eq!(body_json(same).await["slug"], "old-name");

    // New title collides with another project's slug: suffixed.
    let renamed = put_json_auth(app, &uri, json!({ "title": "New Name" }), &token).await;
    assert_eq!(renamed.status(), StatusCode::OK);
    assert_eq!(body_json(renamed).await["slug"], "new-name-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_slug_conflict_is_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    create_project(app.clone(), &token, json!({ "title": "Taken" })).await;
    let other = create_project(app.clone(), &token, json!({ "title": "Other" })).await;
    let id = other["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/admin/projects/{id}"),
        json!({ "slug": "taken" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Re-asserting its own slug is fine.
    let response = put_json_auth(
        app,
        &format!("/api/admin/projects/{id}"),
        json!({ "slug": "Other" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["slug"], "other");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/admin/projects/999999",
        json!({ "title": "Ghost" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_hosted_media(pool: PgPool) {
    let host = Arc::new(FakeHost::default());
    let app = common::build_test_app_with_host(pool, host.clone());
    let token = admin_token();

    let created = create_project(
        app.clone(),
        &token,
        json!({
            "title": "Gallery",
            "media": [
                { "type": "image", "url": "https://media.test/a.png", "provider_id": "portfolio/a" },
                { "type": "video", "url": "https://media.test/b.mp4", "provider_id": "portfolio/b" },
                { "type": "image", "url": "https://elsewhere.test/c.png" }
            ]
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/admin/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let destroyed = host.destroyed.lock().unwrap().clone();
    assert_eq!(
        destroyed,
        vec![
            ("portfolio/a".to_string(), "image".to_string()),
            ("portfolio/b".to_string(), "video".to_string()),
        ]
    );

    let response = get(app.clone(), "/api/projects/gallery").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &format!("/api/admin/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_survives_provider_failure(pool: PgPool) {
    let host = Arc::new(FakeHost::failing_destroy());
    let app = common::build_test_app_with_host(pool, host.clone());
    let token = admin_token();

    let created = create_project(
        app.clone(),
        &token,
        json!({
            "title": "Stubborn",
            "media": [{ "type": "image", "url": "https://media.test/s.png", "provider_id": "portfolio/s" }]
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/admin/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(host.destroyed_ids(), vec!["portfolio/s".to_string()]);

    let response = get(app, "/api/projects/stubborn").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
