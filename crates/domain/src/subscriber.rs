use std::cell::RefCell;

use crate::device::AnalogInput;
use crate::error::Result;

/// Observer side of the publish/subscribe core.
///
/// A subscriber receives the publishing subject itself and reads
/// whatever it needs (tag, value, unit) directly off it. An error
/// return aborts the broadcast pass that delivered it and propagates to
/// whoever triggered the update.
///
/// Publishers hold subscribers through `Weak` handles; implementors are
/// shared as `Rc<dyn Subscriber>` and confined to one thread.
pub trait Subscriber {
    /// Diagnostic name, used in logs and protocol errors
    fn name(&self) -> &str;

    /// Handle one value-change notification
    fn update(&self, subject: &AnalogInput) -> Result<()>;
}

/// Reference subscriber keeping an append-only notification log.
///
/// Each notification is formatted as `"Value changed to {value}{unit}"`
/// and pushed most-recent-last. The log is unbounded; display surfaces
/// truncate through [`recent`](Self::recent).
#[derive(Debug)]
pub struct GenericSubscriber {
    name: String,
    notifications: RefCell<Vec<String>>,
}

impl GenericSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notifications: RefCell::new(Vec::new()),
        }
    }

    /// Full notification log, oldest first
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }

    /// The last `count` notifications, oldest first
    pub fn recent(&self, count: usize) -> Vec<String> {
        let notifications = self.notifications.borrow();
        let start = notifications.len().saturating_sub(count);
        notifications[start..].to_vec()
    }
}

impl Subscriber for GenericSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, subject: &AnalogInput) -> Result<()> {
        let entry = format!(
            "Value changed to {}{}",
            subject.display_value(),
            subject.unit()
        );
        self.notifications.borrow_mut().push(entry);
        Ok(())
    }
}
