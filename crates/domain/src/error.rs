use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Subscriber '{subscriber}' is not attached to '{device}'")]
    SubscriberNotAttached { device: String, subscriber: String },

    #[error("Subscriber '{subscriber}' failed to handle update: {reason}")]
    SubscriberFault { subscriber: String, reason: String },

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Driver error: {0}")]
    DriverError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
