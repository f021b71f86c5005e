use std::rc::Rc;

use tracing::{debug, warn};

use domain::device::{AnalogInput, DeviceFamily, Esp8266Builder, PointKind, RaspberryPiBuilder};
use infrastructure::device_table::DeviceRow;

/// Build the analog input described by one device-table row.
///
/// Only rows with kind "AI" are recognized by the analog path; anything
/// else is skipped here, never rejected. The `Dispositivo` column
/// selects the family builder; rows naming an unknown family are
/// skipped with a warning. The table carries no area column, so the
/// built devices leave it unset.
pub fn device_from_row(row: &DeviceRow) -> Option<AnalogInput> {
    if PointKind::from_code(&row.kind) != Some(PointKind::AnalogInput) {
        debug!(tag = %row.tag, kind = %row.kind, "Skipping non-analog row");
        return None;
    }

    let family = match DeviceFamily::from_name(&row.family) {
        Some(family) => family,
        None => {
            warn!(tag = %row.tag, family = %row.family, "Unknown device family, skipping row");
            return None;
        }
    };

    let device = match family {
        DeviceFamily::Esp8266 => {
            let mut builder = Esp8266Builder::new();
            builder
                .tag(&row.tag)
                .description(&row.description)
                .unit(&row.unit);
            builder.build()
        }
        DeviceFamily::RaspberryPi => {
            let mut builder = RaspberryPiBuilder::new();
            builder
                .tag(&row.tag)
                .description(&row.description)
                .unit(&row.unit);
            builder.build()
        }
    };

    Some(device)
}

/// Build every recognizable device in the table, skipping the rest
pub fn build_devices(rows: &[DeviceRow]) -> Vec<Rc<AnalogInput>> {
    rows.iter()
        .filter_map(device_from_row)
        .map(Rc::new)
        .collect()
}
