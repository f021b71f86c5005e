mod analog_input;
mod builder;
mod digital_output;
mod entity;
mod family;
mod kind;

pub use analog_input::AnalogInput;
pub use builder::{AnalogInputBuilder, Esp8266Builder, RaspberryPiBuilder};
pub use digital_output::DigitalOutput;
pub use entity::Device;
pub use family::DeviceFamily;
pub use kind::PointKind;
