use std::rc::Rc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use domain::device::AnalogInput;
use domain::driver::SensorDriver;
use domain::error::Result;

/// One publisher paired with the driver that feeds it
pub struct PollChannel {
    device: Rc<AnalogInput>,
    driver: Box<dyn SensorDriver>,
}

impl PollChannel {
    pub fn new(device: Rc<AnalogInput>, driver: Box<dyn SensorDriver>) -> Self {
        Self { device, driver }
    }
}

/// Fixed-cadence polling loop over a set of analog inputs.
///
/// Each tick reads every channel's driver and feeds the sample into
/// `update_value`, which broadcasts it. A failed read skips that
/// channel for the tick; a subscriber error aborts the run and
/// propagates, matching the fatal contract of the broadcast core.
pub struct SensorPoller {
    channels: Vec<PollChannel>,
    interval: Duration,
}

impl SensorPoller {
    pub fn new(channels: Vec<PollChannel>, interval: Duration) -> Self {
        Self { channels, interval }
    }

    /// Read every channel once and publish the samples
    pub async fn poll_once(&mut self) -> Result<()> {
        for channel in &mut self.channels {
            let sample = match channel.driver.read_value().await {
                Ok(sample) => sample,
                Err(error) => {
                    warn!(tag = %channel.device.tag(), %error, "Read failed, skipping channel");
                    continue;
                }
            };
            channel.device.update_value(sample)?;
        }
        Ok(())
    }

    /// Poll at the configured cadence until `cancel` fires
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<()> {
        info!(
            channels = self.channels.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Starting poll loop"
        );
        let mut timer = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Shutdown signal received");
                    return Ok(());
                }
                _ = timer.tick() => {
                    self.poll_once().await?;
                }
            }
        }
    }
}
