use std::sync::LazyLock;

use regex::Regex;

use crate::device::AnalogInput;

/// Tag pattern: `<Area><Digit>-<Kind>-<Name><Digit><Digit>`,
/// e.g. `A1-AI-TIT01`
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d+-[A-Z]+-[A-Z]+\d+$").expect("Invalid regex"));

const TEMPERATURE_MIN: f64 = -50.0;
const TEMPERATURE_MAX: f64 = 150.0;

/// Outcome of a structural validation pass.
///
/// Validators collect violations and report; they never fail and never
/// block construction. An empty report means valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn add(&mut self, violation: impl Into<String>) {
        self.violations.push(violation.into());
    }
}

pub fn is_valid_tag(tag: &str) -> bool {
    TAG_PATTERN.is_match(tag)
}

/// Plausible temperature sample, inclusive bounds
pub fn is_valid_temperature(value: f64) -> bool {
    (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&value)
}

pub fn is_valid_temperature_unit(unit: &str) -> bool {
    matches!(unit, "°C" | "°F" | "K")
}

/// Check an already-constructed analog input against the structural
/// rules the constructors deliberately skip.
///
/// The temperature check only applies once a sample has arrived; a
/// fresh device with no value does not violate it.
pub fn validate_analog_input(device: &AnalogInput) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !is_valid_tag(device.tag()) {
        report.add(format!(
            "tag '{}' does not match the expected pattern",
            device.tag()
        ));
    }

    if !is_valid_temperature_unit(device.unit()) {
        report.add(format!(
            "unit '{}' is not a recognized temperature unit",
            device.unit()
        ));
    }

    if let Some(value) = device.value() {
        if !is_valid_temperature(value) {
            report.add(format!(
                "value {value} is outside the plausible temperature range"
            ));
        }
    }

    report
}
