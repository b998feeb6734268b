use std::path::Path;

use anyhow::{bail, Result};

use wifi_map::config::ExportConfig;
use wifi_map::{data_fetch, db_connect, env_loader, json_writer, map_page, sanitize};

fn main() -> Result<()> {
    env_loader::load_env();
    env_logger::init();

    println!("Starting WiFi Network Visualizer export...");

    let config = ExportConfig::from_env();
    println!("Database path: {}", config.db_path.display());

    let conn = db_connect::open(&config.db_path)?;

    let raw_rows = data_fetch::load_networks(&conn)?;
    println!("Loaded {} network records", raw_rows.len());

    let records = sanitize::filter_valid_networks(raw_rows);
    println!("Found {} valid WiFi networks", records.len());
    if records.is_empty() {
        bail!(
            "no valid WiFi networks found in {}",
            config.db_path.display()
        );
    }

    json_writer::write_network_json(Path::new(&config.json_file), &records)?;
    map_page::write_map_page(Path::new(&config.html_file), &records, &config.json_file)?;

    println!("\n🎉 WiFi network visualization completed!");
    println!("Created {} WiFi network markers", records.len());
    println!("Files created:");
    println!("  - {} (WiFi data)", config.json_file);
    println!("  - {} (map page)", config.html_file);
    println!("Run the server binary to view the map in your browser.");

    Ok(())
}
