//! Infrastructure layer - external integrations

pub mod device_table;
pub mod drivers;

pub use device_table::{DeviceRow, load_device_table, read_device_table, validate_rows};
pub use drivers::{SimulatedSensor, driver_for};
