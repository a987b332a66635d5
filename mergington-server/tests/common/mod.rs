use std::sync::Arc;

use anyhow::Result;
use axum_test::TestServer;
use mergington_server::{
    AppState, create_app,
    infra::config::Config,
};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Dev-mode config serving the crate's bundled frontend.
#[allow(unused)]
pub fn test_config() -> Config {
    Config {
        dev_mode: true,
        ..Config::default()
    }
}

/// Fresh app over a newly seeded registry, so every test starts from the
/// seed roster.
#[allow(unused)]
pub fn build_test_app() -> Result<TestApp> {
    let state = AppState::seeded(Arc::new(test_config()));
    let server = TestServer::new(create_app(state.clone()))
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    Ok(TestApp { server, state })
}

/// Participants of `activity` as reported by `GET /activities`.
#[allow(unused)]
pub async fn participants(server: &TestServer, activity: &str) -> Vec<String> {
    let body: serde_json::Value = server
        .get(mergington_core::api::routes::activities::COLLECTION)
        .await
        .json();
    body[activity]["participants"]
        .as_array()
        .map(|list| {
            list.iter()
                .filter_map(|email| email.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
