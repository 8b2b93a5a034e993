// src/process/filter.rs
use tracing::{info, instrument};

use super::{is_missing, IncidentTable};
use crate::error::Result;

/// Column naming the primary cause attributed to the first vehicle.
pub const CATEGORY_COLUMN: &str = "contributing_factor_vehicle_1";

pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";

/// Causes attributed to driver behavior rather than road or vehicle condition.
pub static HUMAN_ERROR_CATEGORIES: &[&str] = &[
    "Driver Inattention/Distraction",
    "Failure to Yield Right-of-Way",
    "Looked But Did Not See",
    "Unsafe Lane Changing",
    "Passing or Lane Usage Improper",
];

/// Keep rows whose `column` value is exactly one of `allowed`.
pub fn select_categories(
    table: IncidentTable,
    column: &str,
    allowed: &[&str],
) -> Result<IncidentTable> {
    let idx = table.column_index(column)?;
    Ok(table.retain_rows(|row| {
        row.get(idx)
            .is_some_and(|field| allowed.contains(&field.as_str()))
    }))
}

/// Drop rows where any of `columns` is missing. A row too short to hold the field counts as missing.
pub fn drop_missing(table: IncidentTable, columns: &[&str]) -> Result<IncidentTable> {
    let idxs = columns
        .iter()
        .map(|c| table.column_index(c))
        .collect::<Result<Vec<_>>>()?;
    Ok(table.retain_rows(|row| {
        idxs.iter()
            .all(|&i| row.get(i).is_some_and(|field| !is_missing(field)))
    }))
}

/// Human-error incidents that carry both coordinates.
#[instrument(level = "info", skip(table), fields(rows = table.len()))]
pub fn filter_human_error(table: IncidentTable) -> Result<IncidentTable> {
    let selected = select_categories(table, CATEGORY_COLUMN, HUMAN_ERROR_CATEGORIES)?;
    let matched = selected.len();
    let located = drop_missing(selected, &[LATITUDE_COLUMN, LONGITUDE_COLUMN])?;
    info!(
        matched,
        kept = located.len(),
        dropped_no_coords = matched - located.len(),
        "filtered human-error incidents"
    );
    Ok(located)
}
