#![cfg(feature = "ssr")]

mod common;

use folio::models::post::{PostIngestResponse, PostSummary};
use folio::similarity::ScoredSummary;

fn post_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "excerpt": "Grid tricks",
        "content": "## Setup\n\nSome text.\n\n### Details\n\nMore.",
        "category": "CSS",
        "tags": ["CSS", "Grid", "CSS"],
        "published": "2024-01-10"
    })
}

#[tokio::test]
async fn ingest_creates_post() {
    let env = common::TestEnv::start();
    let server = env.server();

    let resp: PostIngestResponse = env
        .ingest(&server, post_body("Subgrid in Practice"))
        .await
        .json();
    assert_eq!(resp.slug, "subgrid-in-practice");
    assert_eq!(resp.id, 5);

    let post = env
        .repo
        .find_post_by_slug("subgrid-in-practice")
        .await
        .unwrap()
        .expect("post should exist");
    assert_eq!(post.tags, vec!["CSS", "Grid"]);
    assert_eq!(post.read_time_minutes, 1);
}

#[tokio::test]
async fn ingested_post_shows_up_in_listing_and_similarity() {
    let env = common::TestEnv::start();
    let server = env.server();

    env.ingest(&server, post_body("Subgrid in Practice")).await;

    let posts: Vec<PostSummary> = server
        .get("/api/v1/posts")
        .add_query_param("category", "CSS")
        .await
        .json();
    assert_eq!(posts.len(), 2);

    // Same category, two shared tags, two days apart: 10 + 6 + 2 + 1.
    let similar: Vec<ScoredSummary> = server
        .get("/api/v1/posts/mastering-css-grid-flexbox-layouts/similar")
        .await
        .json();
    assert_eq!(similar[0].post.slug, "subgrid-in-practice");
    assert_eq!(similar[0].score, 19);
}

#[tokio::test]
async fn ingest_rejects_invalid_token() {
    let env = common::TestEnv::start();
    let server = env.server_permissive();

    let mut body = post_body("Nope");
    body["service_token"] = serde_json::json!("wrong-token");
    let response = env.ingest(&server, body).await;

    response.assert_status_unauthorized();
    assert!(env.repo.find_post_by_slug("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn ingest_rejects_bad_slug() {
    let env = common::TestEnv::start();
    let server = env.server_permissive();

    let mut body = post_body("Fine Title");
    body["slug"] = serde_json::json!("Not/A Slug");
    env.ingest(&server, body).await.assert_status_bad_request();
}

#[tokio::test]
async fn ingest_rejects_malformed_body() {
    let env = common::TestEnv::start();
    let server = env.server_permissive();

    let response = server
        .post("/api/v1/posts")
        .json(&serde_json::json!({ "service_token": common::SERVICE_TOKEN }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn delete_post_lifecycle() {
    let env = common::TestEnv::start();
    let server = env.server_permissive();
    let slug = "future-web-development-trends-2024";

    server
        .delete(&format!("/api/v1/posts/{}", slug))
        .json(&serde_json::json!({ "service_token": "wrong" }))
        .await
        .assert_status_unauthorized();

    server
        .delete(&format!("/api/v1/posts/{}", slug))
        .json(&serde_json::json!({ "service_token": common::SERVICE_TOKEN }))
        .await
        .assert_status_ok();

    server
        .get(&format!("/api/v1/posts/{}", slug))
        .await
        .assert_status_not_found();

    server
        .delete(&format!("/api/v1/posts/{}", slug))
        .json(&serde_json::json!({ "service_token": common::SERVICE_TOKEN }))
        .await
        .assert_status_not_found();
}
