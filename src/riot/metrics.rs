use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;
use tracing::info;

/// Riot routes the client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Summoner,
    Matchlist,
    Match,
}

impl Endpoint {
    fn index(self) -> usize {
        self as usize
    }
}

/// Upstream request counts, per endpoint, since the client was built.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    counts: [AtomicU64; 3],
}

/// Point-in-time copy of [`RequestMetrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub summoner: u64,
    pub matchlist: u64,
    pub matches: u64,
    pub elapsed: Duration,
}

impl MetricsSnapshot {
    pub fn total(&self) -> u64 {
        self.summoner + self.matchlist + self.matches
    }

    pub fn per_minute(&self) -> f64 {
        let minutes = self.elapsed.as_secs_f64() / 60.0;
        if minutes > 0.0 {
            self.total() as f64 / minutes
        } else {
            0.0
        }
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requests (summoner {}, matchlist {}, match {}), avg {:.2} req/min",
            self.total(),
            self.summoner,
            self.matchlist,
            self.matches,
            self.per_minute()
        )
    }
}

impl RequestMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            counts: Default::default(),
        })
    }

    pub fn record(&self, endpoint: Endpoint) {
        self.counts[endpoint.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, endpoint: Endpoint) -> u64 {
        self.counts[endpoint.index()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            summoner: self.count(Endpoint::Summoner),
            matchlist: self.count(Endpoint::Matchlist),
            matches: self.count(Endpoint::Match),
            elapsed: self.start.elapsed(),
        }
    }

    /// Logs a snapshot every `period`, skipping periods without traffic.
    /// Never returns.
    pub async fn log_loop(self: Arc<Self>, period: Duration) {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        let mut last_total = 0;
        loop {
            interval.tick().await;
            let snapshot = self.snapshot();
            if snapshot.total() == last_total {
                continue;
            }
            last_total = snapshot.total();
            info!(target: "riot::metrics", "📊 {snapshot}");
        }
    }
}
