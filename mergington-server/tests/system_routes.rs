use anyhow::Result;
use axum::http::{StatusCode, header};
use mergington_core::api::routes;
use serde_json::Value;

mod common;
use common::build_test_app;

#[tokio::test]
async fn root_redirects_to_landing_page() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(routes::ROOT).await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    let location = response.header(header::LOCATION);
    assert_eq!(location.to_str()?, routes::LANDING_PAGE);
    Ok(())
}

#[tokio::test]
async fn landing_page_is_served_from_static_dir() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(routes::LANDING_PAGE).await;
    response.assert_status_ok();
    assert!(response.text().contains("Mergington High School"));

    app.server
        .get("/static/does-not-exist.txt")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn ping_reports_ok() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(routes::PING).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[tokio::test]
async fn health_tracks_registry_counters() -> Result<()> {
    let app = build_test_app()?;

    let body: Value = app.server.get(routes::HEALTH).await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["registry"]["activities"], 9);
    assert_eq!(body["checks"]["registry"]["participants"], 15);
    assert_eq!(body["checks"]["static_files"]["status"], "healthy");

    app.server
        .post(&routes::activities::signup_path("Drama Club"))
        .add_query_param("email", "understudy@mergington.edu")
        .await
        .assert_status_ok();

    let body: Value = app.server.get(routes::HEALTH).await.json();
    assert_eq!(body["checks"]["registry"]["participants"], 16);
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<()> {
    let app = build_test_app()?;

    app.server
        .get("/activities/Chess%20Club")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
