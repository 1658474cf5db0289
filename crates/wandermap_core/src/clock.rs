//! Time source and latency scheduling.
//!
//! # Responsibility
//! - Provide the wall-clock reading used for ids and `createdAt` stamps.
//! - Provide the suspension primitive used to simulate network latency.
//!
//! # Invariants
//! - `sleep` only delays; it never fails and never changes an outcome.
//! - Issued ids are strictly increasing within one store.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;

/// Injectable time dependency shared by every entity store.
///
/// Production code uses [`SystemClock`]. Tests swap in a fixed clock to get
/// deterministic ids and timestamps, or keep the system clock and pause the
/// tokio timer to observe latency windows.
pub trait Clock: Send + Sync + 'static {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspends the calling task for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Wall clock backed by `chrono::Utc` and the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Issues timestamp-derived ids for one store.
///
/// Ids are epoch milliseconds rendered as decimal strings. Two creates in
/// the same millisecond would collide, so each new id is bumped past the
/// last one issued and past any seeded id that happens to match.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last_issued: i64,
}

impl IdSequence {
    pub(crate) fn next(&mut self, now_ms: i64, is_taken: impl Fn(&str) -> bool) -> String {
        let mut candidate = now_ms.max(self.last_issued.saturating_add(1));
        let mut rendered = candidate.to_string();
        while is_taken(&rendered) {
            candidate += 1;
            rendered = candidate.to_string();
        }
        self.last_issued = candidate;
        rendered
    }
}
