// src/db/mod.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Bundled seed file, resolved against the working directory.
pub const SEED_FILE: &str = "db.json";

/// One service registered against a port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub port: String,
    pub description: String,
    pub tcp: bool,
    pub udp: bool,
    pub status: String,
}

impl Service {
    /// The two protocol flags folded into one string: "tcp", "udp",
    /// "tcp/udp", or "" when neither applies.
    pub fn protocol(&self) -> &'static str {
        match (self.tcp, self.udp) {
            (true, true) => "tcp/udp",
            (true, false) => "tcp",
            (false, true) => "udp",
            (false, false) => "",
        }
    }
}

/// The whole database: port string → services registered on that port.
pub type Db = BTreeMap<String, Vec<Service>>;

/// Default on-disk location, `$HOME/.svdb`.
pub fn default_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".svdb"))
}

/// Parse the database file at `path`.
pub fn load(path: &Path) -> Result<Db> {
    let bytes = fs::read(path).with_context(|| format!("opening db file {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("decoding db file {}", path.display()))
}

/// Load the database from `path`, seeding it from `seed` on first use.
pub fn load_or_seed(path: &Path, seed: &Path) -> Result<Db> {
    if !path.exists() {
        fs::copy(seed, path)
            .with_context(|| format!("seeding {} from {}", path.display(), seed.display()))?;
        info!(db = %path.display(), seed = %seed.display(), "seeded service database");
    }
    load(path)
}
