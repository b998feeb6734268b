use std::fs;
use std::path::Path;

use chrono::Local;
use log::info;

use crate::error::{PipelineError, Result};
use crate::models::NetworkRecord;

const MAP_TEMPLATE: &str = include_str!("templates/map.html");

const INITIAL_ZOOM: u32 = 17;

/// Initial map center: the arithmetic mean of all cleaned coordinates.
///
/// Empty input is rejected up front; a mean over zero rows would put the map
/// at NaN.
pub fn map_center(records: &[NetworkRecord]) -> Result<(f64, f64)> {
    if records.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }
    let count = records.len() as f64;
    let center_lat = records.iter().map(|r| r.lat).sum::<f64>() / count;
    let center_lon = records.iter().map(|r| r.lon).sum::<f64>() / count;
    Ok((center_lat, center_lon))
}

/// Renders the interactive map page.
///
/// The page does not embed the records; it fetches `data_url` at runtime and
/// renders only the markers inside the current viewport, so it stays small
/// no matter how large the capture is. `data_url` must be reachable relative
/// to wherever the page is served from.
pub fn render_map_page(records: &[NetworkRecord], data_url: &str) -> Result<String> {
    let (center_lat, center_lon) = map_center(records)?;
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    Ok(MAP_TEMPLATE
        .replace("__CENTER_LAT__", &center_lat.to_string())
        .replace("__CENTER_LON__", &center_lon.to_string())
        .replace("__INITIAL_ZOOM__", &INITIAL_ZOOM.to_string())
        .replace("__DATA_URL__", data_url)
        .replace("__GENERATED_AT__", &generated_at))
}

pub fn write_map_page(path: &Path, records: &[NetworkRecord], data_url: &str) -> Result<()> {
    let page = render_map_page(records, data_url)?;
    fs::write(path, page).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Map page with marker virtualization saved to {}",
        path.display()
    );
    Ok(())
}
