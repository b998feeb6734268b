use std::path::PathBuf;

use log::info;

/// Settings for the export pipeline, read from environment variables with
/// hardcoded defaults. There are no command-line flags; everything the tool
/// needs is this small set of values.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the WiGLE capture database.
    pub db_path: PathBuf,
    /// JSON interchange file, written next to the map page.
    pub json_file: String,
    /// Generated map page. Fetches `json_file` by relative URL, so the two
    /// must stay in the same directory.
    pub html_file: String,
}

impl ExportConfig {
    pub fn from_env() -> Self {
        let db_path = std::env::var("WIFIMAP_DB_PATH")
            .unwrap_or_else(|_| "db/networks.sqlite".to_string());
        let json_file =
            std::env::var("WIFIMAP_JSON_FILE").unwrap_or_else(|_| "wifi_data.json".to_string());
        let html_file =
            std::env::var("WIFIMAP_HTML_FILE").unwrap_or_else(|_| "mapdata.html".to_string());

        info!(
            "Export config: DB={}, JSON={}, HTML={}",
            db_path, json_file, html_file
        );
        ExportConfig {
            db_path: PathBuf::from(db_path),
            json_file,
            html_file,
        }
    }
}

/// Settings for the companion map server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory served over HTTP; must contain the export output files.
    pub serve_dir: PathBuf,
    /// Map page to open in the browser, relative to `serve_dir`.
    pub html_file: String,
    /// Loopback port to listen on.
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let serve_dir = std::env::var("WIFIMAP_SERVE_DIR").unwrap_or_else(|_| ".".to_string());
        let html_file =
            std::env::var("WIFIMAP_HTML_FILE").unwrap_or_else(|_| "mapdata.html".to_string());
        let port = std::env::var("WIFIMAP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        info!(
            "Server config: dir={}, page={}, port={}",
            serve_dir, html_file, port
        );
        ServerConfig {
            serve_dir: PathBuf::from(serve_dir),
            html_file,
            port,
        }
    }
}
