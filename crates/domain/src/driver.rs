use async_trait::async_trait;

use crate::device::DeviceFamily;
use crate::error::Result;

/// Sample source for one analog input.
///
/// The polling loop reads one sample per tick through this seam and
/// feeds it into the publisher. Implementations live in the
/// infrastructure layer; the simulated ones complete immediately.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensorDriver: Send {
    /// Produce the next sample
    async fn read_value(&mut self) -> Result<f64>;

    /// Hardware family this driver emulates
    fn family(&self) -> DeviceFamily;
}
