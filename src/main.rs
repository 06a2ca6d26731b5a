use anyhow::Result;
use reqwest::blocking::Client;
use svdb_scrape::{extract, fetch, store};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Where the scraped dataset lands, relative to the working directory.
const OUT_FILE: &str = "svdb-scraped.json";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let client = Client::new();

    info!(url = fetch::PORTS_URL, "fetching port assignments");
    let html = match fetch::fetch_page(&client, fetch::PORTS_URL)? {
        Some(html) => html,
        None => {
            error!("failed to retrieve the page; nothing written");
            return Ok(());
        }
    };

    let records = match extract::extract_ports(&html)? {
        Some(records) => records,
        None => {
            error!("no port table found; nothing written");
            return Ok(());
        }
    };

    store::write_json(&records, OUT_FILE)?;
    info!(rows = records.len(), file = OUT_FILE, "scrape complete");
    Ok(())
}
