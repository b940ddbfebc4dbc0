//! Periodic self-ping so free-tier hosts don't put the webhook server to sleep.

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use url::Url;

pub fn spawn(url: Url, every: Duration, timeout: Duration) -> anyhow::Result<JoinHandle<()>> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    tracing::info!(%url, "keep-alive every {}s", every.as_secs());

    Ok(tokio::spawn(async move {
        let mut tick = interval_at(Instant::now() + every, every);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tick.tick().await;
            ping(&client, &url).await;
        }
    }))
}

async fn ping(client: &reqwest::Client, url: &Url) {
    match client.get(url.clone()).send().await {
        Ok(resp) if resp.status().is_success() => {
            tracing::debug!(status = resp.status().as_u16(), "keep-alive ok")
        }
        Ok(resp) => tracing::warn!(status = resp.status().as_u16(), "keep-alive got an error status"),
        Err(e) => tracing::warn!("keep-alive failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, routing::get, Router};
    use tokio::{net::TcpListener, sync::mpsc, time::timeout};

    use super::*;

    async fn ping_target() -> (Url, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(8);
        let app = Router::new()
            .route(
                "/",
                get(|State(tx): State<mpsc::Sender<()>>| async move {
                    let _ = tx.try_send(());
                    "ok"
                }),
            )
            .with_state(tx);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (Url::parse(&format!("http://{addr}/")).unwrap(), rx)
    }

    #[tokio::test]
    async fn pings_the_url_on_every_tick() {
        let (url, mut hits) = ping_target().await;
        let task = spawn(url, Duration::from_millis(50), Duration::from_secs(2)).unwrap();

        for _ in 0..2 {
            timeout(Duration::from_secs(5), hits.recv())
                .await
                .expect("keep-alive never pinged")
                .unwrap();
        }
        task.abort();
    }

    #[tokio::test]
    async fn first_ping_waits_one_interval() {
        let (url, mut hits) = ping_target().await;
        let task = spawn(url, Duration::from_secs(60), Duration::from_secs(2)).unwrap();

        assert!(timeout(Duration::from_millis(200), hits.recv()).await.is_err());
        task.abort();
    }
}
