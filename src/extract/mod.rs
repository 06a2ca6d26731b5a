// src/extract/mod.rs

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{debug, warn};

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.wikitable").expect("table selector should be valid"));
static HEADER_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("header selector should be valid"));
static ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("row selector should be valid"));
static CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("cell selector should be valid"));

/// One scraped table row.
///
/// The outer `Option` on each field tracks whether the row had a cell under
/// that header at all; serialization skips fields that were never set. For
/// `TCP`/`UDP` the inner value is `None` when the cell read "No".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortRecord {
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(rename = "TCP", skip_serializing_if = "Option::is_none")]
    pub tcp: Option<Option<String>>,
    #[serde(rename = "UDP", skip_serializing_if = "Option::is_none")]
    pub udp: Option<Option<String>>,
}

/// Extract port records from the first `wikitable` in `html`.
///
/// Header names are collected from every `<th>` in the table (table-wide, not
/// just the first row), then each row after the first is read positionally
/// against that list. Only the "Port", "TCP" and "UDP" columns are kept; a
/// row with more cells than headers, or a non-numeric "Port" cell, is an
/// error.
pub fn extract_ports(html: &str) -> Result<Option<Vec<PortRecord>>> {
    let doc = Html::parse_document(html);
    let table = match doc.select(&TABLE).next() {
        Some(t) => t,
        None => {
            warn!("table not found on the page");
            return Ok(None);
        }
    };

    let headers: Vec<String> = table.select(&HEADER_CELLS).map(cell_text).collect();
    debug!(columns = headers.len(), "resolved header names");

    let mut records = Vec::new();
    for row in table.select(&ROWS).skip(1) {
        let mut record = PortRecord::default();
        for (i, cell) in row.select(&CELLS).enumerate() {
            let name = headers.get(i).with_context(|| {
                format!("row has more cells than the {} header names", headers.len())
            })?;
            let text = cell_text(cell);
            match name.as_str() {
                "Port" => {
                    let port = text
                        .parse::<u16>()
                        .with_context(|| format!("invalid port number {:?}", text))?;
                    record.port = Some(port);
                }
                "TCP" => record.tcp = Some(protocol_value(text)),
                "UDP" => record.udp = Some(protocol_value(text)),
                _ => {}
            }
        }
        records.push(record);
    }

    Ok(Some(records))
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// "No" marks the protocol as unassigned for this row.
fn protocol_value(text: String) -> Option<String> {
    if text == "No" {
        None
    } else {
        Some(text)
    }
}
