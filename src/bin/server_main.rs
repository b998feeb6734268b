use std::process::Command;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use axum::Router;
use log::{error, info, warn};
use tower_http::services::ServeDir;

use wifi_map::config::ServerConfig;
use wifi_map::env_loader;

#[tokio::main]
async fn main() -> Result<()> {
    env_loader::load_env();
    env_logger::init();

    let config = ServerConfig::from_env();

    let page_path = config.serve_dir.join(&config.html_file);
    if !page_path.exists() {
        bail!(
            "{} not found; run the export binary first",
            page_path.display()
        );
    }

    let app = Router::new().fallback_service(ServeDir::new(&config.serve_dir));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    println!("Server started at http://localhost:{}", config.port);
    println!(
        "{} should open automatically in your browser",
        config.html_file
    );
    println!("Press Ctrl+C to stop the server");

    let url = format!("http://localhost:{}/{}", config.port, config.html_file);
    tokio::spawn(async move {
        // Give the server a moment to come up before pointing a browser at it.
        tokio::time::sleep(Duration::from_secs(2)).await;
        match open_browser(&url) {
            Ok(()) => info!("Opened {} in the default browser", url),
            Err(e) => {
                warn!("Could not open browser automatically: {}", e);
                warn!("Please open {} manually", url);
            }
        }
    });

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Map server error: {}", e);
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c signal")?;
    info!("Shutdown signal received");
    server_handle.abort();
    println!("\nServer stopped.");

    Ok(())
}

#[cfg(target_os = "macos")]
fn open_browser(url: &str) -> std::io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn open_browser(url: &str) -> std::io::Result<()> {
    Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_browser(url: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
