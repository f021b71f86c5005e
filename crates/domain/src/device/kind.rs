use std::fmt;

/// Category of instrumentation point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    AnalogInput,
    DigitalInput,
    DigitalOutput,
}

impl PointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalogInput => "AI",
            Self::DigitalInput => "DI",
            Self::DigitalOutput => "DO",
        }
    }

    /// Parse the short code used by device tables ("AI", "DI", "DO")
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AI" => Some(Self::AnalogInput),
            "DI" => Some(Self::DigitalInput),
            "DO" => Some(Self::DigitalOutput),
            _ => None,
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
