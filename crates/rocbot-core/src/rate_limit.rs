//! Best-effort per-chat throttling. Not authoritative: losing the table on
//! restart is harmless.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use crate::domain::ChatId;

/// Beyond this many tracked chats, idle (fully refilled) buckets are dropped.
const MAX_TRACKED_CHATS: usize = 10_000;

#[derive(Clone, Copy, Debug)]
struct Bucket {
    tokens: f64,
    last_update: Instant,
}

/// Token bucket per chat: `max_tokens` taps per `window`, refilled continuously.
#[derive(Debug)]
pub struct RateLimiter {
    enabled: bool,
    max_tokens: f64,
    refill_per_sec: f64,
    window: Duration,
    buckets: HashMap<ChatId, Bucket>,
}

impl RateLimiter {
    pub fn new(enabled: bool, max_tokens: u32, window: Duration) -> Self {
        let max_tokens_f = f64::from(max_tokens);
        let window_secs = window.as_secs_f64().max(1e-9);

        Self {
            enabled,
            max_tokens: max_tokens_f,
            refill_per_sec: max_tokens_f / window_secs,
            window,
            buckets: HashMap::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, 1, Duration::from_secs(1))
    }

    /// `Ok(())` if the chat may proceed, otherwise how long until the next token.
    pub fn check(&mut self, chat_id: ChatId) -> Result<(), Duration> {
        self.check_at(chat_id, Instant::now())
    }

    pub fn check_at(&mut self, chat_id: ChatId, now: Instant) -> Result<(), Duration> {
        if !self.enabled {
            return Ok(());
        }

        if self.buckets.len() >= MAX_TRACKED_CHATS && !self.buckets.contains_key(&chat_id) {
            self.evict_idle(now);
        }

        let bucket = self.buckets.entry(chat_id).or_insert_with(|| Bucket {
            tokens: self.max_tokens,
            last_update: now,
        });

        let elapsed = now.saturating_duration_since(bucket.last_update).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.max_tokens);
        bucket.last_update = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return Ok(());
        }

        let secs = (1.0 - bucket.tokens) / self.refill_per_sec;
        Err(Duration::from_secs_f64(secs.max(0.0)))
    }

    /// Buckets untouched for a full window have refilled; dropping them loses nothing.
    fn evict_idle(&mut self, now: Instant) {
        let window = self.window;
        self.buckets
            .retain(|_, b| now.saturating_duration_since(b.last_update) < window);
    }

    pub fn tracked_chats(&self) -> usize {
        self.buckets.len()
    }
}
