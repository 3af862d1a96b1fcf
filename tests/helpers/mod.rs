//! Shared setup for router-level tests

#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use landing::{AppState, Config};
use landing_contact::{Append, SheetRow};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Configuration from `config/default.toml` with no environment applied.
pub fn test_config() -> anyhow::Result<Config> {
    Ok(Config::load_with_env(None, HashMap::new())?)
}

/// In-memory sheet recording every appended row.
#[derive(Clone, Default)]
pub struct MemorySheet {
    pub rows: Arc<Mutex<Vec<SheetRow>>>,
}

#[async_trait]
impl Append for MemorySheet {
    async fn append(&self, _range: &str, row: &SheetRow) -> anyhow::Result<()> {
        self.rows.lock().await.push(row.clone());

        Ok(())
    }
}

/// Sheet failing with upstream details that must never reach a client.
#[derive(Clone, Default)]
pub struct FailingSheet;

pub const UPSTREAM_DETAIL: &str = "PERMISSION_DENIED: caller relay@project lacks sheets.append";

#[async_trait]
impl Append for FailingSheet {
    async fn append(&self, _range: &str, _row: &SheetRow) -> anyhow::Result<()> {
        anyhow::bail!("sheets append answered 403 Forbidden: {UPSTREAM_DETAIL}")
    }
}

pub fn app_with(sheet: impl Append + 'static) -> anyhow::Result<Router> {
    let config = test_config()?;
    let contact_command = landing_contact::Command::new(sheet, config.contact.target());

    Ok(landing::create_app(AppState {
        config,
        contact_command,
    }))
}

pub async fn send(app: Router, request: Request<Body>) -> anyhow::Result<Response<Body>> {
    Ok(app.oneshot(request).await?)
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

/// Serves the app on an ephemeral local port.
pub async fn spawn_app(app: Router) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(addr)
}
