use std::fs;
use std::path::Path;

use log::info;

use crate::error::{PipelineError, Result};
use crate::models::NetworkRecord;

/// Writes the cleaned record set as a JSON array for the map page to fetch.
///
/// The payload lands in a `.tmp` sibling first and is renamed into place, so
/// the map page can never fetch a partially written file. Non-ASCII text is
/// emitted as literal UTF-8, not numeric escapes.
pub fn write_network_json(path: &Path, records: &[NetworkRecord]) -> Result<()> {
    info!(
        "Saving {} WiFi networks to {}...",
        records.len(),
        path.display()
    );

    let payload = serde_json::to_vec_pretty(records)?;
    let tmp_path = temp_sibling(path);

    if let Err(source) = fs::write(&tmp_path, &payload) {
        let _ = fs::remove_file(&tmp_path);
        return Err(PipelineError::Write {
            path: tmp_path,
            source,
        });
    }
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(PipelineError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        "Saved {} WiFi networks to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

fn temp_sibling(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<NetworkRecord> {
        vec![
            NetworkRecord {
                lat: 45.4642,
                lon: 9.19,
                ssid: "Caffè Milano".to_string(),
                mac: "AA:BB:CC:DD:EE:01".to_string(),
                rssi: -48,
                channel: 6,
                auth: "[WPA2-PSK-CCMP][ESS]".to_string(),
            },
            NetworkRecord {
                lat: 45.47,
                lon: 9.18,
                ssid: "open net".to_string(),
                mac: "AA:BB:CC:DD:EE:02".to_string(),
                rssi: 0,
                channel: 0,
                auth: "[ESS]".to_string(),
            },
        ]
    }

    #[test]
    fn written_file_round_trips_to_the_same_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wifi_data.json");
        let records = sample_records();

        write_network_json(&path, &records).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let reloaded: Vec<NetworkRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn non_ascii_text_is_written_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wifi_data.json");

        write_network_json(&path, &sample_records()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Caffè Milano"));
        assert!(!raw.contains("\\u00e8"));
    }

    #[test]
    fn no_temp_file_is_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wifi_data.json");

        write_network_json(&path, &sample_records()).unwrap();

        assert!(path.exists());
        assert!(!path.with_file_name("wifi_data.json.tmp").exists());
    }

    #[test]
    fn unwritable_target_propagates_an_error() {
        let path = Path::new("/nonexistent-dir/wifi_data.json");
        let result = write_network_json(path, &sample_records());
        assert!(matches!(result, Err(PipelineError::Write { .. })));
    }

    #[test]
    fn empty_record_set_writes_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wifi_data.json");

        write_network_json(&path, &[]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let reloaded: Vec<NetworkRecord> = serde_json::from_str(&raw).unwrap();
        assert!(reloaded.is_empty());
    }
}
