//! Webhook delivery: the production path.
//!
//! Telegram POSTs JSON updates to `/webhook`; `/` and `/health` answer
//! liveness probes from the hosting platform.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use teloxide::{prelude::*, types::Update};
use tokio::{net::TcpListener, time::Instant};
use url::Url;

use rocbot_core::dispatch::MenuRouter;

use crate::{startup, updates};

/// Header Telegram echoes back when the webhook was registered with a secret.
pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

const ROOT_BODY: &str = "Telegram Bot is running!";

#[derive(Clone)]
struct WebhookState {
    router: Arc<MenuRouter>,
    secret: Option<String>,
    start_time: Instant,
}

/// HTTP routes, separate from binding so tests can drive them in-process.
pub fn app(router: Arc<MenuRouter>, secret: Option<String>) -> Router {
    let state = WebhookState {
        router,
        secret,
        start_time: Instant::now(),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/webhook", post(webhook_handler))
        .with_state(Arc::new(state))
}

async fn root_handler() -> &'static str {
    ROOT_BODY
}

async fn health_handler(State(state): State<Arc<WebhookState>>) -> impl IntoResponse {
    let status = serde_json::json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(status))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

fn secret_matches(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    headers
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|got| got == expected)
        .unwrap_or(false)
}

async fn webhook_handler(
    State(state): State<Arc<WebhookState>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if !is_json(&headers) {
        tracing::warn!("rejected webhook request with a non-JSON content type");
        return StatusCode::FORBIDDEN;
    }
    if !secret_matches(&headers, state.secret.as_deref()) {
        tracing::warn!("rejected webhook request with a bad secret token");
        return StatusCode::FORBIDDEN;
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::error!("failed to decode webhook update: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    match updates::event_from_update(&update) {
        Some(event) => {
            state.router.handle(&event).await;
        }
        None => tracing::debug!(update_id = update.id, "unhandled update kind"),
    }
    StatusCode::OK
}

/// Replace whatever webhook was registered before with ours.
async fn register(bot: &Bot, url: &Url, secret: Option<&str>) -> anyhow::Result<()> {
    match startup::with_backoff("deleteWebhook", || bot.delete_webhook()).await {
        Ok(_) => tracing::info!("old webhook removed"),
        Err(e) => tracing::error!("failed to remove old webhook: {e:#}"),
    }

    startup::with_backoff("setWebhook", || {
        let mut req = bot.set_webhook(url.clone());
        if let Some(secret) = secret {
            req = req.secret_token(secret.to_string());
        }
        req
    })
    .await?;
    tracing::info!(%url, "webhook registered");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

pub async fn run_webhook(
    bot: Bot,
    router: Arc<MenuRouter>,
    url: Url,
    secret: Option<String>,
    port: u16,
) -> anyhow::Result<()> {
    startup::handshake(&bot).await?;
    register(&bot, &url, secret.as_deref()).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(mode = "webhook", "listening on http://{addr}");

    axum::serve(listener, app(router, secret))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
