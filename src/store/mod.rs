// src/store/mod.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize `records` as an indented JSON array at `path`, replacing any
/// existing file. The write is not atomic.
pub fn write_json<T: Serialize>(records: &[T], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records).context("serializing records")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(file = %path.display(), "wrote dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_ports;
    use tempfile::tempdir;

    #[test]
    fn written_file_parses_back_with_one_element_per_data_row() {
        let html = r#"<table class="wikitable">
            <tr><th>Port</th><th>TCP</th><th>UDP</th></tr>
            <tr><td>80</td><td>HTTP</td><td>HTTP</td></tr>
            <tr><td>53</td><td>DNS</td><td>DNS</td></tr>
            <tr><td>69</td><td>No</td><td>TFTP</td></tr>
        </table>"#;
        let records = extract_ports(html).unwrap().unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("svdb-scraped.json");
        write_json(&records, &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["Port"], 80);
        assert!(rows[2]["TCP"].is_null());
    }

    #[test]
    fn output_is_indented() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&[serde_json::json!({"Port": 80})], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  "));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale contents").unwrap();
        let empty: [serde_json::Value; 0] = [];
        write_json(&empty, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
