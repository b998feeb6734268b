use log::info;

use crate::models::{NetworkRecord, RawNetworkRow};

/// Record type tag for wireless networks in WiGLE captures.
const WIRELESS_TYPE: &str = "W";

/// Capture tools write a literal `?` into coordinate cells when no GPS fix
/// was available.
const UNKNOWN_COORD_MARKER: char = '?';

/// Display strings longer than this are truncated (ellipsis included).
const MAX_TEXT_LEN: usize = 100;

const ELLIPSIS: &str = "...";

/// Cleans captured text for embedding in a script context.
///
/// Quotes are escaped, newlines and tabs collapse to single spaces, control
/// characters (U+0000–U+001F and U+007F–U+009F) are stripped, and anything
/// over 100 characters is cut to 97 plus an ellipsis. SSIDs come straight
/// off the air and can contain anything.
pub fn clean_display_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => cleaned.push_str("\\'"),
            '"' => cleaned.push_str("\\\""),
            '\n' | '\r' | '\t' => cleaned.push(' '),
            c if c.is_control() => {}
            c => cleaned.push(c),
        }
    }

    if cleaned.chars().count() > MAX_TEXT_LEN {
        let mut truncated: String = cleaned.chars().take(MAX_TEXT_LEN - ELLIPSIS.len()).collect();
        truncated.push_str(ELLIPSIS);
        cleaned = truncated;
    }

    cleaned.trim().to_string()
}

/// Filters raw rows down to valid wireless observations and produces cleaned
/// records. Malformed rows are dropped silently; this is a best-effort pass
/// over noisy field-capture data.
pub fn filter_valid_networks(rows: Vec<RawNetworkRow>) -> Vec<NetworkRecord> {
    let total = rows.len();
    let records: Vec<NetworkRecord> = rows.into_iter().filter_map(sanitize_row).collect();
    info!(
        "Found {} valid WiFi networks ({} raw rows dropped)",
        records.len(),
        total - records.len()
    );
    records
}

/// Validates and cleans a single row. Returns `None` when the row must be
/// dropped:
/// - type is not the wireless tag (the query already filters on this; the
///   check is repeated here on purpose)
/// - any required field is NULL
/// - either coordinate carries the unknown-fix marker or fails to parse
fn sanitize_row(row: RawNetworkRow) -> Option<NetworkRecord> {
    if row.net_type.as_deref() != Some(WIRELESS_TYPE) {
        return None;
    }

    let mac = row.mac?;
    let ssid = row.ssid?;
    let auth_mode = row.auth_mode?;
    let channel = row.channel?;
    let rssi = row.rssi?;
    let latitude = row.latitude?;
    let longitude = row.longitude?;

    if latitude.contains(UNKNOWN_COORD_MARKER) || longitude.contains(UNKNOWN_COORD_MARKER) {
        return None;
    }

    let lat = latitude.trim().parse::<f64>().ok()?;
    let lon = longitude.trim().parse::<f64>().ok()?;

    Some(NetworkRecord {
        lat,
        lon,
        ssid: clean_display_text(&ssid),
        mac: clean_display_text(&mac),
        rssi: coerce_integer(&rssi),
        channel: coerce_integer(&channel),
        auth: clean_display_text(&auth_mode),
    })
}

/// Integer coercion for channel/rssi cells: integer parse first, then
/// float truncation for real-typed cells, 0 for anything non-numeric.
fn coerce_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        .unwrap_or(0)
}
