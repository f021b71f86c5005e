//! Domain layer - device model and the publish/subscribe core
//!
//! This crate contains:
//! - Entities (Device, AnalogInput, DigitalOutput)
//! - The subscriber contract and the reference log subscriber
//! - Device builders (generic and per-family)
//! - The driver seam consumed by the polling layer
//! - Structural validators
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Construction is unchecked; validation is a separate, explicit step
//! - The broadcast core is single-threaded and lock-free
//! - Testable in isolation

pub mod device;
pub mod driver;
pub mod error;
pub mod subscriber;
pub mod validation;

// Re-export commonly used types
pub use device::{
    AnalogInput, AnalogInputBuilder, Device, DeviceFamily, DigitalOutput, Esp8266Builder,
    PointKind, RaspberryPiBuilder,
};
pub use driver::SensorDriver;
pub use error::DomainError;
pub use subscriber::{GenericSubscriber, Subscriber};
pub use validation::ValidationReport;
