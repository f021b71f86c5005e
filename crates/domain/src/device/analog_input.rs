use std::cell::{Cell, RefCell};
use std::fmt;
use std::ptr;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{Device, DeviceFamily, PointKind};
use crate::error::{DomainError, Result};
use crate::subscriber::Subscriber;

/// Analog input point, the subject side of the publish/subscribe core.
///
/// Holds the current reading plus an ordered collection of subscriber
/// handles. Every value change is broadcast synchronously to the
/// subscribers in attachment order. The handles are weak: the publisher
/// never keeps a subscriber alive, and a dropped subscriber's slot stays
/// in place (skipped during broadcast) until an explicit `detach`.
///
/// All operations take `&self` through interior mutability and perform
/// no locking. A publisher and its subscribers must be confined to one
/// thread; callers serialize access externally.
#[derive(Debug)]
pub struct AnalogInput {
    info: Device,
    range_min: Option<f64>,
    range_max: Option<f64>,
    unit: String,
    family: Option<DeviceFamily>,
    value: Cell<Option<f64>>,
    last_update: Cell<Option<DateTime<Utc>>>,
    subscribers: RefCell<Vec<Weak<dyn Subscriber>>>,
}

impl AnalogInput {
    pub fn new(
        tag: impl Into<String>,
        area: impl Into<String>,
        description: impl Into<String>,
        range_min: f64,
        range_max: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            tag.into(),
            area.into(),
            description.into(),
            Some(range_min),
            Some(range_max),
            unit.into(),
            None,
        )
    }

    pub(crate) fn from_parts(
        tag: String,
        area: String,
        description: String,
        range_min: Option<f64>,
        range_max: Option<f64>,
        unit: String,
        family: Option<DeviceFamily>,
    ) -> Self {
        Self {
            info: Device::new(tag, area, description, PointKind::AnalogInput),
            range_min,
            range_max,
            unit,
            family,
            value: Cell::new(None),
            last_update: Cell::new(None),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn tag(&self) -> &str {
        &self.info.tag
    }

    pub fn area(&self) -> &str {
        &self.info.area
    }

    pub fn description(&self) -> &str {
        &self.info.description
    }

    pub fn kind(&self) -> PointKind {
        self.info.kind
    }

    /// Advisory lower bound; never enforced on writes
    pub fn range_min(&self) -> Option<f64> {
        self.range_min
    }

    /// Advisory upper bound; never enforced on writes
    pub fn range_max(&self) -> Option<f64> {
        self.range_max
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn family(&self) -> Option<DeviceFamily> {
        self.family
    }

    /// Current reading; `None` until the first update
    pub fn value(&self) -> Option<f64> {
        self.value.get()
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update.get()
    }

    /// Current reading for display surfaces, "---" before the first sample
    pub fn display_value(&self) -> String {
        match self.value.get() {
            Some(value) => value.to_string(),
            None => "---".to_string(),
        }
    }

    /// Number of subscriber entries, dead handles included
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Whether at least one live entry refers to this subscriber
    pub fn is_attached(&self, subscriber: &dyn Subscriber) -> bool {
        position_of(&self.subscribers.borrow(), subscriber).is_some()
    }

    /// Append a subscriber handle.
    ///
    /// Duplicates are allowed and counted individually: attaching the
    /// same subscriber twice produces two entries and two update calls
    /// per broadcast.
    pub fn attach(&self, subscriber: Weak<dyn Subscriber>) {
        self.subscribers.borrow_mut().push(subscriber);
    }

    /// Remove exactly one occurrence of `subscriber` (first match).
    ///
    /// Errors if no live entry refers to it. Detaching something that
    /// was never attached is a protocol violation, not a no-op.
    pub fn detach(&self, subscriber: &dyn Subscriber) -> Result<()> {
        let mut subscribers = self.subscribers.borrow_mut();
        match position_of(&subscribers, subscriber) {
            Some(index) => {
                subscribers.remove(index);
                Ok(())
            }
            None => Err(DomainError::SubscriberNotAttached {
                device: self.info.tag.clone(),
                subscriber: subscriber.name().to_string(),
            }),
        }
    }

    /// Broadcast the current state to every attached subscriber.
    ///
    /// Traversal is index-based over the live collection, re-checking
    /// the bounds at each step: a subscriber that attaches or detaches
    /// entries from inside its own `update` changes which positions the
    /// rest of this pass visits. Dead handles are skipped, never pruned.
    /// The first subscriber error aborts the pass and propagates.
    pub fn notify(&self) -> Result<()> {
        let mut index = 0;
        loop {
            let entry = {
                let subscribers = self.subscribers.borrow();
                match subscribers.get(index) {
                    Some(handle) => handle.clone(),
                    None => break,
                }
            };
            if let Some(subscriber) = entry.upgrade() {
                subscriber.update(self)?;
            }
            index += 1;
        }
        Ok(())
    }

    /// Store a new reading and broadcast it.
    ///
    /// The value is stored unconditionally; the advisory range is not
    /// checked, out-of-range samples are published as-is.
    pub fn update_value(&self, value: f64) -> Result<()> {
        self.value.set(Some(value));
        self.last_update.set(Some(Utc::now()));
        debug!(tag = %self.info.tag, value, unit = %self.unit, "Updating value");
        self.notify()
    }
}

impl fmt::Display for AnalogInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnalogInput(tag={}, area={}, description={}, range_min=",
            self.info.tag, self.info.area, self.info.description
        )?;
        fmt_opt(f, self.range_min)?;
        f.write_str(", range_max=")?;
        fmt_opt(f, self.range_max)?;
        write!(f, ", unit={}, value=", self.unit)?;
        fmt_opt(f, self.value.get())?;
        f.write_str(")")
    }
}

/// First live entry referring to `subscriber`, by identity of the
/// underlying allocation (vtable pointers are not compared).
fn position_of(entries: &[Weak<dyn Subscriber>], subscriber: &dyn Subscriber) -> Option<usize> {
    entries.iter().position(|entry| {
        entry
            .upgrade()
            .is_some_and(|live| ptr::addr_eq(Rc::as_ptr(&live), subscriber as *const dyn Subscriber))
    })
}

fn fmt_opt(f: &mut fmt::Formatter<'_>, value: Option<f64>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{value}"),
        None => f.write_str("None"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: String,
        seen: RefCell<Vec<Option<f64>>>,
    }

    impl Probe {
        fn new(name: &str) -> Rc<Self> {
            Rc::new(Self {
                name: name.to_string(),
                seen: RefCell::new(Vec::new()),
            })
        }
    }

    impl Subscriber for Probe {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&self, subject: &AnalogInput) -> Result<()> {
            self.seen.borrow_mut().push(subject.value());
            Ok(())
        }
    }

    fn sensor() -> AnalogInput {
        AnalogInput::new(
            "A1-AI-TIT01",
            "Área 1",
            "Sensor de Temperatura",
            0.0,
            100.0,
            "°C",
        )
    }

    #[test]
    fn test_new_sensor_has_no_value_and_no_subscribers() {
        let input = sensor();

        assert_eq!(input.tag(), "A1-AI-TIT01");
        assert_eq!(input.kind(), PointKind::AnalogInput);
        assert_eq!(input.range_min(), Some(0.0));
        assert_eq!(input.range_max(), Some(100.0));
        assert_eq!(input.unit(), "°C");
        assert_eq!(input.value(), None);
        assert_eq!(input.last_update(), None);
        assert_eq!(input.subscriber_count(), 0);
    }

    #[test]
    fn test_display_with_value() {
        let input = sensor();
        input.update_value(25.5).unwrap();

        assert_eq!(
            input.to_string(),
            "AnalogInput(tag=A1-AI-TIT01, area=Área 1, description=Sensor de Temperatura, \
             range_min=0, range_max=100, unit=°C, value=25.5)"
        );
    }

    #[test]
    fn test_display_with_absent_fields() {
        let input = AnalogInput::from_parts(
            "A1-AI-TIT01".to_string(),
            String::new(),
            String::new(),
            None,
            None,
            String::new(),
            None,
        );

        assert_eq!(
            input.to_string(),
            "AnalogInput(tag=A1-AI-TIT01, area=, description=, \
             range_min=None, range_max=None, unit=, value=None)"
        );
    }

    #[test]
    fn test_display_value_placeholder() {
        let input = sensor();
        assert_eq!(input.display_value(), "---");

        input.update_value(21.0).unwrap();
        assert_eq!(input.display_value(), "21");
    }

    #[test]
    fn test_duplicate_attach_counts_twice() {
        let input = sensor();
        let probe = Probe::new("probe");

        input.attach(Rc::<Probe>::downgrade(&probe));
        input.attach(Rc::<Probe>::downgrade(&probe));

        assert_eq!(input.subscriber_count(), 2);

        input.update_value(10.0).unwrap();
        assert_eq!(probe.seen.borrow().len(), 2);
    }

    #[test]
    fn test_detach_removes_one_occurrence() {
        let input = sensor();
        let probe = Probe::new("probe");

        input.attach(Rc::<Probe>::downgrade(&probe));
        input.attach(Rc::<Probe>::downgrade(&probe));
        input.detach(probe.as_ref()).unwrap();

        assert_eq!(input.subscriber_count(), 1);
        assert!(input.is_attached(probe.as_ref()));

        input.detach(probe.as_ref()).unwrap();
        assert_eq!(input.subscriber_count(), 0);
        assert!(!input.is_attached(probe.as_ref()));
    }

    #[test]
    fn test_detach_never_attached_is_an_error() {
        let input = sensor();
        let probe = Probe::new("stranger");

        let result = input.detach(probe.as_ref());

        assert_eq!(
            result,
            Err(DomainError::SubscriberNotAttached {
                device: "A1-AI-TIT01".to_string(),
                subscriber: "stranger".to_string(),
            })
        );
    }

    #[test]
    fn test_update_value_ignores_advisory_range() {
        let input = sensor();
        let probe = Probe::new("probe");
        input.attach(Rc::<Probe>::downgrade(&probe));

        input.update_value(-10.0).unwrap();

        assert_eq!(input.value(), Some(-10.0));
        assert_eq!(*probe.seen.borrow(), vec![Some(-10.0)]);
        assert!(input.last_update().is_some());
    }

    #[test]
    fn test_dropped_subscriber_is_skipped_not_pruned() {
        let input = sensor();
        let probe = Probe::new("short-lived");
        input.attach(Rc::<Probe>::downgrade(&probe));
        drop(probe);

        input.update_value(5.0).unwrap();

        assert_eq!(input.subscriber_count(), 1);
    }

    #[test]
    fn test_notify_without_update_passes_absent_value() {
        let input = sensor();
        let probe = Probe::new("probe");
        input.attach(Rc::<Probe>::downgrade(&probe));

        input.notify().unwrap();

        assert_eq!(*probe.seen.borrow(), vec![None]);
    }
}
