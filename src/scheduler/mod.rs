pub mod tasks;

use anyhow::{Context, Result};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, info};

/// Runs periodic jobs (the heartbeat) next to the update dispatcher.
/// Jobs are plain synchronous closures; nothing here talks to Telegram.
pub struct Scheduler {
    inner: JobScheduler,
}

impl Scheduler {
    pub async fn new() -> Result<Self> {
        let inner = JobScheduler::new()
            .await
            .context("Failed to create job scheduler")?;
        Ok(Self { inner })
    }

    /// Register `tick` to run on every match of `cron_expr`
    /// (six fields, seconds first: `"0 0 * * * *"` is hourly).
    pub async fn every<F>(&self, cron_expr: &str, name: &str, tick: F) -> Result<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let job_name = name.to_string();
        let job = Job::new_async(cron_expr, move |_uuid, _lock| {
            debug!("Tick: {}", job_name);
            tick();
            Box::pin(async {})
        })
        .with_context(|| format!("Invalid cron expression for '{}': {}", name, cron_expr))?;

        self.inner
            .add(job)
            .await
            .with_context(|| format!("Failed to register job '{}'", name))?;

        info!("Job '{}' runs on '{}'", name, cron_expr);
        Ok(())
    }

    pub async fn start(&self) -> Result<()> {
        self.inner
            .start()
            .await
            .context("Failed to start scheduler")?;
        Ok(())
    }

    /// Stop all jobs once the dispatcher has returned.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.inner
            .shutdown()
            .await
            .context("Failed to shut down scheduler")?;
        info!("Scheduler stopped");
        Ok(())
    }
}
