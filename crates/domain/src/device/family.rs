use std::fmt;

/// Hardware line a field device belongs to.
///
/// Selects the builder variant during construction and the simulated
/// driver profile during polling. The names match the `Dispositivo`
/// column of the device table verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    Esp8266,
    RaspberryPi,
}

impl DeviceFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esp8266 => "ESP8266",
            Self::RaspberryPi => "RaspberryPi",
        }
    }

    /// Parse the family name used by device tables
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ESP8266" => Some(Self::Esp8266),
            "RaspberryPi" => Some(Self::RaspberryPi),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
