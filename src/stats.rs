use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use crate::greeter::{JoinError, JoinOutcome};

/// Process-lifetime counters of join request outcomes
#[derive(Debug)]
pub struct JoinStats {
    started_at: DateTime<Utc>,
    approved: AtomicU64,
    approval_failed: AtomicU64,
    private_delivered: AtomicU64,
    private_failed: AtomicU64,
    welcome_failed: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinStatsSnapshot {
    pub approved: u64,
    pub approval_failed: u64,
    pub private_delivered: u64,
    pub private_failed: u64,
    pub welcome_failed: u64,
}

impl JoinStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            approved: AtomicU64::new(0),
            approval_failed: AtomicU64::new(0),
            private_delivered: AtomicU64::new(0),
            private_failed: AtomicU64::new(0),
            welcome_failed: AtomicU64::new(0),
        }
    }

    pub fn record(&self, result: &Result<JoinOutcome, JoinError>) {
        match result {
            Ok(outcome) => {
                self.approved.fetch_add(1, Ordering::Relaxed);
                self.record_private(outcome.private_message_delivered);
            }
            Err(JoinError::Approval { .. }) => {
                self.approval_failed.fetch_add(1, Ordering::Relaxed);
            }
            Err(JoinError::Welcome {
                private_message_delivered,
                ..
            }) => {
                // The request itself was approved before the welcome failed.
                self.approved.fetch_add(1, Ordering::Relaxed);
                self.record_private(*private_message_delivered);
                self.welcome_failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn record_private(&self, delivered: bool) {
        if delivered {
            self.private_delivered.fetch_add(1, Ordering::Relaxed);
        } else {
            self.private_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn snapshot(&self) -> JoinStatsSnapshot {
        JoinStatsSnapshot {
            approved: self.approved.load(Ordering::Relaxed),
            approval_failed: self.approval_failed.load(Ordering::Relaxed),
            private_delivered: self.private_delivered.load(Ordering::Relaxed),
            private_failed: self.private_failed.load(Ordering::Relaxed),
            welcome_failed: self.welcome_failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for JoinStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JoinStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "approved={} approval_failed={} pm_delivered={} pm_failed={} welcome_failed={}",
            self.approved,
            self.approval_failed,
            self.private_delivered,
            self.private_failed,
            self.welcome_failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let stats = JoinStats::new();
        stats.record(&Ok(JoinOutcome {
            private_message_delivered: true,
        }));
        stats.record(&Ok(JoinOutcome {
            private_message_delivered: false,
        }));
        stats.record(&Err(JoinError::Approval {
            chat_id: -100,
            user_id: 7,
            source: anyhow::anyhow!("not enough rights"),
        }));
        stats.record(&Err(JoinError::Welcome {
            chat_id: -100,
            user_id: 8,
            private_message_delivered: true,
            source: anyhow::anyhow!("chat not found"),
        }));

        assert_eq!(
            stats.snapshot(),
            JoinStatsSnapshot {
                approved: 3,
                approval_failed: 1,
                private_delivered: 2,
                private_failed: 1,
                welcome_failed: 1,
            }
        );
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = JoinStatsSnapshot {
            approved: 2,
            ..Default::default()
        };
        assert_eq!(
            snapshot.to_string(),
            "approved=2 approval_failed=0 pm_delivered=0 pm_failed=0 welcome_failed=0"
        );
    }
}
