use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use domain::device::{DeviceFamily, PointKind};
use domain::validation::{self, ValidationReport};

/// One row of the device table.
///
/// The column names follow the plant convention and stay Portuguese at
/// this boundary; everything past the factory speaks English.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRow {
    #[serde(rename = "Tipo")]
    pub kind: String,
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "Descrição")]
    pub description: String,
    #[serde(rename = "Unidade")]
    pub unit: String,
    #[serde(rename = "Dispositivo")]
    pub family: String,
}

/// Read device rows from any CSV source with a header line
pub fn read_device_table<R: std::io::Read>(reader: R) -> Result<Vec<DeviceRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in reader.deserialize::<DeviceRow>() {
        rows.push(row.context("Malformed device table row")?);
    }
    Ok(rows)
}

/// Read the device table from a CSV file
pub fn load_device_table(path: impl AsRef<Path>) -> Result<Vec<DeviceRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Cannot open device table {}", path.display()))?;
    read_device_table(file)
        .with_context(|| format!("Cannot parse device table {}", path.display()))
}

/// Check every row against the structural rules without blocking
/// construction.
///
/// Kind and tag are checked on all rows. Unit and family are checked
/// only on analog rows, which are the only consumers of those columns.
/// Line numbers in the violations are 1-based over the data rows.
pub fn validate_rows(rows: &[DeviceRow]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;
        let kind = PointKind::from_code(&row.kind);

        if kind.is_none() {
            report.add(format!("line {line}: unrecognized kind '{}'", row.kind));
        }
        if !validation::is_valid_tag(&row.tag) {
            report.add(format!("line {line}: invalid tag '{}'", row.tag));
        }
        if kind == Some(PointKind::AnalogInput) {
            if !validation::is_valid_temperature_unit(&row.unit) {
                report.add(format!("line {line}: invalid unit '{}'", row.unit));
            }
            if DeviceFamily::from_name(&row.family).is_none() {
                report.add(format!(
                    "line {line}: unknown device family '{}'",
                    row.family
                ));
            }
        }
    }

    report
}
