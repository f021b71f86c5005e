use std::rc::Rc;

use tracing::info;

use domain::device::AnalogInput;
use domain::error::{DomainError, Result};
use domain::subscriber::Subscriber;

/// Wires subscribers to publishers by tag.
///
/// Owns the shared device set and resolves tags before touching the
/// registry, so an association against an unknown tag surfaces as
/// `DeviceNotFound` instead of silently doing nothing. Detach errors
/// from the core bubble through unchanged.
pub struct AssociationManager {
    devices: Vec<Rc<AnalogInput>>,
}

impl AssociationManager {
    pub fn new(devices: Vec<Rc<AnalogInput>>) -> Self {
        Self { devices }
    }

    pub fn devices(&self) -> &[Rc<AnalogInput>] {
        &self.devices
    }

    /// Look a device up by tag
    pub fn device(&self, tag: &str) -> Option<&Rc<AnalogInput>> {
        self.devices.iter().find(|device| device.tag() == tag)
    }

    /// Attach `subscriber` to the device carrying `tag`
    pub fn associate<S>(&self, tag: &str, subscriber: &Rc<S>) -> Result<()>
    where
        S: Subscriber + 'static,
    {
        let device = self
            .device(tag)
            .ok_or_else(|| DomainError::DeviceNotFound(tag.to_string()))?;
        device.attach(Rc::<S>::downgrade(subscriber));
        info!(tag = %tag, subscriber = %subscriber.name(), "Association created");
        Ok(())
    }

    /// Detach `subscriber` from the device carrying `tag`
    pub fn dissociate<S>(&self, tag: &str, subscriber: &Rc<S>) -> Result<()>
    where
        S: Subscriber + 'static,
    {
        let device = self
            .device(tag)
            .ok_or_else(|| DomainError::DeviceNotFound(tag.to_string()))?;
        device.detach(subscriber.as_ref())?;
        info!(tag = %tag, subscriber = %subscriber.name(), "Association removed");
        Ok(())
    }
}
