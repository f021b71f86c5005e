use super::{AnalogInput, DeviceFamily};

/// Step-by-step assembler for [`AnalogInput`] devices.
///
/// Setters store the given value verbatim (no coercion, no validation)
/// and return `&mut Self` for chaining. `build` copies the accumulated
/// fields into a fresh instance and leaves the accumulator untouched,
/// so one builder can produce any number of independent devices.
/// Fields never set default to an absent marker: empty strings for
/// text, `None` for the numeric bounds. `build` never fails.
#[derive(Debug, Clone, Default)]
pub struct AnalogInputBuilder {
    tag: Option<String>,
    area: Option<String>,
    description: Option<String>,
    range_min: Option<f64>,
    range_max: Option<f64>,
    unit: Option<String>,
    family: Option<DeviceFamily>,
}

impl AnalogInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn area(&mut self, area: impl Into<String>) -> &mut Self {
        self.area = Some(area.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn range_min(&mut self, range_min: f64) -> &mut Self {
        self.range_min = Some(range_min);
        self
    }

    pub fn range_max(&mut self, range_max: f64) -> &mut Self {
        self.range_max = Some(range_max);
        self
    }

    pub fn unit(&mut self, unit: impl Into<String>) -> &mut Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn family(&mut self, family: DeviceFamily) -> &mut Self {
        self.family = Some(family);
        self
    }

    pub fn build(&self) -> AnalogInput {
        AnalogInput::from_parts(
            self.tag.clone().unwrap_or_default(),
            self.area.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            self.range_min,
            self.range_max,
            self.unit.clone().unwrap_or_default(),
            self.family,
        )
    }
}

/// Builder for ESP8266-based analog inputs.
///
/// Thin wrapper over [`AnalogInputBuilder`] with the family preset;
/// identical contract otherwise.
#[derive(Debug, Clone)]
pub struct Esp8266Builder {
    inner: AnalogInputBuilder,
}

impl Esp8266Builder {
    pub fn new() -> Self {
        let mut inner = AnalogInputBuilder::new();
        inner.family(DeviceFamily::Esp8266);
        Self { inner }
    }

    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.inner.tag(tag);
        self
    }

    pub fn area(&mut self, area: impl Into<String>) -> &mut Self {
        self.inner.area(area);
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.inner.description(description);
        self
    }

    pub fn range_min(&mut self, range_min: f64) -> &mut Self {
        self.inner.range_min(range_min);
        self
    }

    pub fn range_max(&mut self, range_max: f64) -> &mut Self {
        self.inner.range_max(range_max);
        self
    }

    pub fn unit(&mut self, unit: impl Into<String>) -> &mut Self {
        self.inner.unit(unit);
        self
    }

    pub fn build(&self) -> AnalogInput {
        self.inner.build()
    }
}

impl Default for Esp8266Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Raspberry Pi-based analog inputs.
///
/// Thin wrapper over [`AnalogInputBuilder`] with the family preset;
/// identical contract otherwise.
#[derive(Debug, Clone)]
pub struct RaspberryPiBuilder {
    inner: AnalogInputBuilder,
}

impl RaspberryPiBuilder {
    pub fn new() -> Self {
        let mut inner = AnalogInputBuilder::new();
        inner.family(DeviceFamily::RaspberryPi);
        Self { inner }
    }

    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.inner.tag(tag);
        self
    }

    pub fn area(&mut self, area: impl Into<String>) -> &mut Self {
        self.inner.area(area);
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.inner.description(description);
        self
    }

    pub fn range_min(&mut self, range_min: f64) -> &mut Self {
        self.inner.range_min(range_min);
        self
    }

    pub fn range_max(&mut self, range_max: f64) -> &mut Self {
        self.inner.range_max(range_max);
        self
    }

    pub fn unit(&mut self, unit: impl Into<String>) -> &mut Self {
        self.inner.unit(unit);
        self
    }

    pub fn build(&self) -> AnalogInput {
        self.inner.build()
    }
}

impl Default for RaspberryPiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_chain_and_store_verbatim() {
        let mut builder = AnalogInputBuilder::new();
        builder
            .tag("A1-AI-TIT01")
            .area("Área 1")
            .description("Sensor de Temperatura")
            .range_min(0.0)
            .range_max(100.0)
            .unit("°C");

        let device = builder.build();

        assert_eq!(device.tag(), "A1-AI-TIT01");
        assert_eq!(device.area(), "Área 1");
        assert_eq!(device.description(), "Sensor de Temperatura");
        assert_eq!(device.range_min(), Some(0.0));
        assert_eq!(device.range_max(), Some(100.0));
        assert_eq!(device.unit(), "°C");
        assert_eq!(device.value(), None);
    }

    #[test]
    fn test_partial_builder_defaults_missing_fields() {
        let mut builder = AnalogInputBuilder::new();
        builder.tag("A1-AI-TIT01");

        let device = builder.build();

        assert_eq!(device.tag(), "A1-AI-TIT01");
        assert_eq!(device.area(), "");
        assert_eq!(device.description(), "");
        assert_eq!(device.unit(), "");
        assert_eq!(device.range_min(), None);
        assert_eq!(device.range_max(), None);
        assert_eq!(device.family(), None);
    }

    #[test]
    fn test_build_twice_yields_distinct_equal_instances() {
        let mut builder = AnalogInputBuilder::new();
        builder.tag("A1-AI-TIT01").unit("°C").range_min(0.0);

        let first = builder.build();
        let second = builder.build();

        assert_eq!(first.tag(), second.tag());
        assert_eq!(first.unit(), second.unit());
        assert_eq!(first.range_min(), second.range_min());

        // Distinct instances: updating one leaves the other untouched.
        first.update_value(10.0).unwrap();
        assert_eq!(first.value(), Some(10.0));
        assert_eq!(second.value(), None);
    }

    #[test]
    fn test_builder_reuse_keeps_earlier_fields() {
        let mut builder = AnalogInputBuilder::new();
        builder.tag("A1-AI-TIT01").unit("°C");
        let first = builder.build();

        builder.tag("A1-AI-TIT02");
        let second = builder.build();

        assert_eq!(first.tag(), "A1-AI-TIT01");
        assert_eq!(second.tag(), "A1-AI-TIT02");
        assert_eq!(second.unit(), "°C");
    }

    #[test]
    fn test_last_write_wins() {
        let mut builder = AnalogInputBuilder::new();
        builder.unit("°C").unit("K");

        assert_eq!(builder.build().unit(), "K");
    }

    #[test]
    fn test_family_builders_preset_family() {
        let mut esp = Esp8266Builder::new();
        esp.tag("A1-AI-TIT01").unit("°C");
        let mut pi = RaspberryPiBuilder::new();
        pi.tag("A2-AI-TIT02").unit("K");

        assert_eq!(esp.build().family(), Some(DeviceFamily::Esp8266));
        assert_eq!(pi.build().family(), Some(DeviceFamily::RaspberryPi));
    }
}
