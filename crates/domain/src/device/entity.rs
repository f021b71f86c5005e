use std::fmt;

use super::PointKind;

/// Base record for a named instrumentation point.
///
/// Plain descriptive data: a structured tag, the plant area, free-text
/// description, and the point category. The constructor performs no
/// validation; tag format and the rest of the structural rules are
/// checked by the separate validator layer, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub tag: String,
    pub area: String,
    pub description: String,
    pub kind: PointKind,
}

impl Device {
    pub fn new(
        tag: impl Into<String>,
        area: impl Into<String>,
        description: impl Into<String>,
        kind: PointKind,
    ) -> Self {
        Self {
            tag: tag.into(),
            area: area.into(),
            description: description.into(),
            kind,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device(tag={}, area={}, description={}, kind={})",
            self.tag, self.area, self.description, self.kind
        )
    }
}
