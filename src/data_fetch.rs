use log::{debug, info};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};

use crate::error::Result;
use crate::models::RawNetworkRow;

/// Fixed projection over the WiGLE `network` table, restricted to wireless
/// records. The filter stage re-checks the type on every row; the WHERE
/// clause here is the first of the two checks.
const NETWORK_QUERY: &str = "\
    SELECT
        bssid,
        ssid,
        capabilities,
        lasttime,
        frequency,
        bestlevel,
        lastlat,
        lastlon,
        type
    FROM network
    WHERE type = 'W'";

/// Loads all wireless network observations from the capture database.
///
/// A missing table or column surfaces here as a fatal sqlite error when the
/// statement is prepared. Cell values are carried as text regardless of
/// their declared storage class; cleaning and coercion happen downstream.
pub fn load_networks(conn: &Connection) -> Result<Vec<RawNetworkRow>> {
    info!("Loading WiFi network data from SQLite database...");
    debug!("Network query: {}", NETWORK_QUERY);

    let mut statement = conn.prepare(NETWORK_QUERY)?;
    let rows = statement.query_map([], row_to_raw_network)?;

    let mut networks = Vec::new();
    for row in rows {
        networks.push(row?);
    }

    info!("Loaded {} network records", networks.len());
    Ok(networks)
}

fn row_to_raw_network(row: &Row) -> rusqlite::Result<RawNetworkRow> {
    Ok(RawNetworkRow {
        mac: value_to_text(row.get_ref(0)?),
        ssid: value_to_text(row.get_ref(1)?),
        auth_mode: value_to_text(row.get_ref(2)?),
        last_seen: value_to_integer(row.get_ref(3)?),
        channel: value_to_text(row.get_ref(4)?),
        rssi: value_to_text(row.get_ref(5)?),
        latitude: value_to_text(row.get_ref(6)?),
        longitude: value_to_text(row.get_ref(7)?),
        net_type: value_to_text(row.get_ref(8)?),
    })
}

/// Text representation of a cell, whatever its storage class. NULL maps to
/// `None` so the filter stage can drop incomplete rows.
fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
    }
}

fn value_to_integer(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) => Some(f as i64),
        ValueRef::Text(t) => String::from_utf8_lossy(t).trim().parse::<i64>().ok(),
        ValueRef::Blob(_) => None,
    }
}
