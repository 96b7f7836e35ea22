//! Failure-window lockout tracking held in process memory.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use zonegate_core::config::LockoutConfig;
use zonegate_core::result::AppResult;
use zonegate_core::traits::clock::{Clock, SystemClock};
use zonegate_core::traits::lockout::{LockoutDecision, LockoutPolicy};
use zonegate_core::types::id::PrincipalId;

/// Counts recent failures per principal and locks the principal out once the
/// threshold is reached.
pub struct MemoryLockoutPolicy {
    config: LockoutConfig,
    /// Principal → failure timestamps, oldest first
    failures: DashMap<PrincipalId, Vec<DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryLockoutPolicy {
    /// Create a lockout policy on the system clock.
    pub fn new(config: LockoutConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a lockout policy reading time from `clock`.
    pub fn with_clock(config: LockoutConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            failures: DashMap::new(),
            clock,
        }
    }

    /// Record a failed authentication for `principal_id` at the current time.
    pub fn record_failure(&self, principal_id: &PrincipalId) {
        let now = self.clock.now();
        self.record_failure_at(principal_id, now);
    }

    /// Record a failed authentication at an explicit instant.
    ///
    /// Failures that have left the counting window are dropped on insert.
    pub fn record_failure_at(&self, principal_id: &PrincipalId, at: DateTime<Utc>) {
        let since = self.window_start(self.clock.now());
        let mut entry = self.failures.entry(principal_id.clone()).or_default();
        entry.push(at);
        entry.retain(|failed_at| *failed_at >= since);
        entry.sort_unstable();

        if entry.is_empty() {
            drop(entry);
            self.failures.remove_if(principal_id, |_, failures| failures.is_empty());
        }
    }

    /// Forget all failures for `principal_id`.
    pub fn reset(&self, principal_id: &PrincipalId) {
        self.failures.remove(principal_id);
    }

    fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(seconds(self.config.count_failures_within_seconds))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn lockout_period(&self) -> Duration {
        seconds(self.config.lockout_period_seconds)
    }
}

fn seconds(value: u64) -> Duration {
    Duration::try_seconds(i64::try_from(value).unwrap_or(i64::MAX)).unwrap_or(Duration::MAX)
}

#[async_trait]
impl LockoutPolicy for MemoryLockoutPolicy {
    async fn is_allowed(&self, principal_id: &PrincipalId) -> AppResult<LockoutDecision> {
        let now = self.clock.now();
        let Some(failures) = self.failures.get(principal_id) else {
            return Ok(LockoutDecision::allowed(0));
        };

        let since = self.window_start(now);
        let recent: Vec<_> = failures.iter().filter(|at| **at >= since).collect();
        let failure_count = u32::try_from(recent.len()).unwrap_or(u32::MAX);

        if failure_count < self.config.lockout_after_failures {
            return Ok(LockoutDecision::allowed(failure_count));
        }

        let still_locked = recent
            .last()
            .and_then(|last| last.checked_add_signed(self.lockout_period()))
            .is_none_or(|unlocks_at| unlocks_at > now);

        if still_locked {
            tracing::debug!(
                principal = %principal_id,
                failure_count,
                "Principal locked out"
            );
            Ok(LockoutDecision::denied(failure_count))
        } else {
            Ok(LockoutDecision::allowed(failure_count))
        }
    }
}
