//! Static file server for the built site.
//!
//! Serves the compiled CSR bundle during development. The contact form talks
//! to the remote mailer directly from the browser, so there is no application
//! backend here: this process hosts files and nothing else.

use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init();

    let site_root = env::var("LEPTOS_SITE_ROOT").unwrap_or_else(|_| "target/site".to_string());
    let addr: SocketAddr = env::var("LEPTOS_SITE_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;

    // Unknown paths fall back to index.html so client-side routes resolve.
    let index = Path::new(&site_root).join("index.html");
    let app = Router::new().fallback_service(ServeDir::new(&site_root).fallback(ServeFile::new(index)));

    log::info!("serving {site_root} at http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
