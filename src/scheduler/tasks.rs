use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::config::HeartbeatConfig;
use crate::scheduler::Scheduler;
use crate::stats::JoinStats;

/// Register the heartbeat job: logs that the bot is alive together with the
/// join request counters collected since startup.
pub async fn register_heartbeat(
    scheduler: &Scheduler,
    config: &HeartbeatConfig,
    stats: Arc<JoinStats>,
) -> anyhow::Result<()> {
    if !config.enabled {
        info!("Heartbeat disabled");
        return Ok(());
    }

    scheduler
        .every(&config.cron, "heartbeat", move || {
            info!("{}", heartbeat_line(&stats));
        })
        .await
}

fn heartbeat_line(stats: &JoinStats) -> String {
    let uptime = Utc::now() - stats.started_at();
    format!(
        "Heartbeat: bot is alive (uptime {}m) {}",
        uptime.num_minutes(),
        stats.snapshot()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeter::JoinOutcome;

    #[test]
    fn test_heartbeat_line_includes_counters() {
        let stats = JoinStats::new();
        stats.record(&Ok(JoinOutcome {
            private_message_delivered: true,
        }));

        let line = heartbeat_line(&stats);
        assert!(line.starts_with("Heartbeat: bot is alive (uptime 0m)"));
        assert!(line.contains("approved=1"));
        assert!(line.contains("pm_delivered=1"));
    }

    #[tokio::test]
    async fn test_disabled_heartbeat_registers_nothing() {
        let scheduler = Scheduler::new().await.unwrap();
        let config = HeartbeatConfig {
            enabled: false,
            cron: "not a cron expression".to_string(),
        };

        register_heartbeat(&scheduler, &config, Arc::new(JoinStats::new()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_hourly_heartbeat_registers() {
        let scheduler = Scheduler::new().await.unwrap();

        register_heartbeat(
            &scheduler,
            &HeartbeatConfig::default(),
            Arc::new(JoinStats::new()),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_invalid_cron_is_rejected() {
        let scheduler = Scheduler::new().await.unwrap();
        let config = HeartbeatConfig {
            enabled: true,
            cron: "every hour".to_string(),
        };

        assert!(register_heartbeat(&scheduler, &config, Arc::new(JoinStats::new()))
            .await
            .is_err());
    }
}
