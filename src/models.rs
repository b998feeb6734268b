use serde::{Deserialize, Serialize};

/// One observation row as it comes out of the capture database, before any
/// cleaning. Every field is optional: WiGLE captures routinely contain NULLs
/// and mis-typed cells, so values are carried as their text representation
/// and coerced later.
#[derive(Debug, Clone, Default)]
pub struct RawNetworkRow {
    pub mac: Option<String>,
    pub ssid: Option<String>,
    pub auth_mode: Option<String>,
    /// Time of most recent observation. Carried through unmodified, never
    /// filtered on, and not part of the serialized output.
    pub last_seen: Option<i64>,
    pub channel: Option<String>,
    pub rssi: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub net_type: Option<String>,
}

/// A cleaned network observation, ready for serialization. Field names match
/// the interchange format exactly; the map page consumes these as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub lat: f64,
    pub lon: f64,
    pub ssid: String,
    pub mac: String,
    pub rssi: i64,
    pub channel: i64,
    pub auth: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_record_serializes_with_interchange_field_names() {
        let record = NetworkRecord {
            lat: 45.0,
            lon: 9.0,
            ssid: "Home WiFi".to_string(),
            mac: "AA:BB:CC".to_string(),
            rssi: -50,
            channel: 6,
            auth: "WPA2".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["auth", "channel", "lat", "lon", "mac", "rssi", "ssid"]
        );
    }
}
