use std::fmt;

use super::{Device, PointKind};

/// Digital output point (actuator side).
///
/// Descriptive record only: no published value and no subscriber list.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalOutput {
    info: Device,
}

impl DigitalOutput {
    pub fn new(
        tag: impl Into<String>,
        area: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            info: Device::new(tag, area, description, PointKind::DigitalOutput),
        }
    }

    pub fn tag(&self) -> &str {
        &self.info.tag
    }

    pub fn area(&self) -> &str {
        &self.info.area
    }

    pub fn description(&self) -> &str {
        &self.info.description
    }

    pub fn kind(&self) -> PointKind {
        self.info.kind
    }
}

impl fmt::Display for DigitalOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DigitalOutput(tag={}, area={}, description={})",
            self.info.tag, self.info.area, self.info.description
        )
    }
}
