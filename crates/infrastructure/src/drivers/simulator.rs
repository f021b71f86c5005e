use async_trait::async_trait;

use domain::device::DeviceFamily;
use domain::driver::SensorDriver;
use domain::error::Result;

/// Simulated sample source.
///
/// Generates a sine waveform between the configured bounds, derived
/// from the system clock so consecutive reads trace a smooth curve
/// without per-driver state. The wave period depends on the family:
/// ESP8266 boards report a fast-moving signal, Raspberry Pi a slow one.
pub struct SimulatedSensor {
    family: DeviceFamily,
    min_value: f64,
    max_value: f64,
}

impl SimulatedSensor {
    pub fn new(family: DeviceFamily, min_value: f64, max_value: f64) -> Self {
        Self {
            family,
            min_value,
            max_value,
        }
    }

    /// Wave period in seconds for this family
    fn period(&self) -> f64 {
        match self.family {
            DeviceFamily::Esp8266 => 10.0,
            DeviceFamily::RaspberryPi => 30.0,
        }
    }

    fn generate_value(&self) -> f64 {
        let since_epoch = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();

        let range = self.max_value - self.min_value;
        let midpoint = self.min_value + range / 2.0;
        let amplitude = range / 2.0;

        let frequency = 1.0 / self.period();
        let raw_value =
            midpoint + amplitude * (since_epoch * frequency * 2.0 * std::f64::consts::PI).sin();

        // Round to two decimals, like a real transmitter would report
        (raw_value * 100.0).round() / 100.0
    }
}

#[async_trait]
impl SensorDriver for SimulatedSensor {
    async fn read_value(&mut self) -> Result<f64> {
        Ok(self.generate_value())
    }

    fn family(&self) -> DeviceFamily {
        self.family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_samples_stay_within_bounds() {
        let mut driver = SimulatedSensor::new(DeviceFamily::Esp8266, 0.0, 100.0);

        for _ in 0..5 {
            let sample = driver.read_value().await.unwrap();
            assert!((0.0..=100.0).contains(&sample), "sample {sample} out of range");
        }
    }

    #[tokio::test]
    async fn test_samples_are_rounded_to_two_decimals() {
        let mut driver = SimulatedSensor::new(DeviceFamily::RaspberryPi, -10.0, 10.0);

        let sample = driver.read_value().await.unwrap();
        let scaled = sample * 100.0;

        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_degenerate_range_is_constant() {
        let mut driver = SimulatedSensor::new(DeviceFamily::Esp8266, 50.0, 50.0);

        assert_eq!(driver.read_value().await.unwrap(), 50.0);
        assert_eq!(driver.read_value().await.unwrap(), 50.0);
    }

    #[test]
    fn test_family_accessor() {
        let driver = SimulatedSensor::new(DeviceFamily::RaspberryPi, 0.0, 1.0);
        assert_eq!(driver.family(), DeviceFamily::RaspberryPi);
    }
}
