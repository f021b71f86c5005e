//! Application layer - use cases and orchestration

pub mod associations;
pub mod factory;
pub mod poller;

pub use associations::AssociationManager;
pub use factory::{build_devices, device_from_row};
pub use poller::{PollChannel, SensorPoller};
