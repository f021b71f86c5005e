mod simulator;

pub use simulator::SimulatedSensor;

use tracing::debug;

use domain::device::{AnalogInput, DeviceFamily};
use domain::driver::SensorDriver;

const DEFAULT_RANGE_MIN: f64 = 0.0;
const DEFAULT_RANGE_MAX: f64 = 100.0;

/// Create the simulated driver matching a device's family and range.
///
/// Devices built from partial rows may carry no family or bounds; the
/// ESP8266 profile and a 0..100 span stand in.
pub fn driver_for(device: &AnalogInput) -> Box<dyn SensorDriver> {
    let family = match device.family() {
        Some(family) => family,
        None => {
            debug!(tag = %device.tag(), "No family recorded, defaulting to ESP8266");
            DeviceFamily::Esp8266
        }
    };
    let min_value = device.range_min().unwrap_or(DEFAULT_RANGE_MIN);
    let max_value = device.range_max().unwrap_or(DEFAULT_RANGE_MAX);

    Box::new(SimulatedSensor::new(family, min_value, max_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::device::{AnalogInputBuilder, RaspberryPiBuilder};

    #[test]
    fn test_driver_follows_device_family() {
        let mut builder = RaspberryPiBuilder::new();
        builder.tag("A1-AI-TIT01").unit("°C").range_min(0.0).range_max(100.0);
        let device = builder.build();

        assert_eq!(driver_for(&device).family(), DeviceFamily::RaspberryPi);
    }

    #[test]
    fn test_unset_family_defaults_to_esp8266() {
        let mut builder = AnalogInputBuilder::new();
        builder.tag("A1-AI-TIT01");
        let device = builder.build();

        assert_eq!(device.family(), None);
        assert_eq!(driver_for(&device).family(), DeviceFamily::Esp8266);
    }

    #[tokio::test]
    async fn test_unset_range_uses_default_span() {
        let mut builder = AnalogInputBuilder::new();
        builder.tag("A1-AI-TIT01").unit("°C");
        let device = builder.build();

        let mut driver = driver_for(&device);
        let sample = driver.read_value().await.unwrap();

        assert!((DEFAULT_RANGE_MIN..=DEFAULT_RANGE_MAX).contains(&sample));
    }
}
