//! Service manager backed by `systemctl`.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{CommandRunner, ServiceManager};
use crate::infra::command_runner::ensure_success;

const SYSTEMCTL: &str = "systemctl";
/// `systemctl stop` exit status for a unit systemd has not loaded.
const UNIT_NOT_LOADED: i32 = 5;

/// Drives the system instance of systemd through `systemctl`.
pub struct Systemctl<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> Systemctl<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn call(&self, args: &[&str]) -> Result<()> {
        let output = self.runner.run(SYSTEMCTL, args).await?;
        ensure_success(&output, SYSTEMCTL, args)
    }

    /// `systemctl <verb> --quiet <unit>` answers through its exit status
    /// alone: 0 means yes, anything else (including "no such unit") means no.
    async fn query(&self, verb: &str, unit: &str) -> Result<bool> {
        let output = self.runner.run(SYSTEMCTL, &[verb, "--quiet", unit]).await?;
        let yes = output.status.success();
        debug!(verb, unit, yes, "systemctl query");
        Ok(yes)
    }
}

impl<R: CommandRunner> ServiceManager for Systemctl<R> {
    async fn reload(&self) -> Result<()> {
        self.call(&["daemon-reload"]).await
    }

    async fn enable(&self, unit: &str) -> Result<()> {
        self.call(&["enable", unit]).await
    }

    async fn disable(&self, unit: &str) -> Result<()> {
        self.call(&["disable", unit]).await
    }

    async fn start(&self, unit: &str) -> Result<()> {
        self.call(&["start", unit]).await
    }

    async fn stop(&self, unit: &str) -> Result<()> {
        let args = ["stop", unit];
        let output = self.runner.run(SYSTEMCTL, &args).await?;
        if output.status.code() == Some(UNIT_NOT_LOADED) {
            debug!(unit, "unit not loaded, nothing to stop");
            return Ok(());
        }
        ensure_success(&output, SYSTEMCTL, &args)
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        self.query("is-enabled", unit).await
    }

    async fn is_active(&self, unit: &str) -> Result<bool> {
        self.query("is-active", unit).await
    }
}
