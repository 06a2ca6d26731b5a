// src/query/mod.rs

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

use crate::db::{Db, Service};

/// Look up services for a comma separated list of ports, concatenated in
/// argument order. Unknown ports are skipped with a warning.
pub fn by_port(db: &Db, ports: &str) -> Vec<Service> {
    let mut services = Vec::new();
    for port in ports.split(',') {
        let port = port.trim();
        match db.get(port) {
            Some(found) => services.extend(found.iter().cloned()),
            None => warn!(%port, "service not found in db"),
        }
    }
    services
}

/// Match every service whose lowercased description plus protocol string
/// matches `pattern`.
pub fn by_match(db: &Db, pattern: &str) -> Result<Vec<Service>> {
    let re = Regex::new(pattern)
        .with_context(|| format!("compiling regular expression {:?}", pattern))?;

    let mut services = Vec::new();
    for entries in db.values() {
        for service in entries {
            let haystack = format!(
                "{} {}",
                service.description.to_lowercase(),
                service.protocol()
            );
            if re.is_match(&haystack) {
                services.push(service.clone());
            }
        }
    }
    Ok(services)
}

/// Copy each service keeping only the named fields; everything else is left
/// zeroed so the plain printer skips it. Unknown field names select nothing.
pub fn select_fields(services: &[Service], fields: &[String]) -> Vec<Service> {
    services
        .iter()
        .map(|s| {
            let mut out = Service::default();
            for field in fields {
                match field.as_str() {
                    "port" => out.port = s.port.clone(),
                    "description" => out.description = s.description.clone(),
                    "tcp" => out.tcp = s.tcp,
                    "udp" => out.udp = s.udp,
                    "status" => out.status = s.status.clone(),
                    other => warn!(field = other, "unknown select field"),
                }
            }
            out
        })
        .collect()
}

/// Bare value of one field, for single-field selections.
pub fn field_value(service: &Service, field: &str) -> String {
    match field {
        "port" => service.port.clone(),
        "description" => service.description.clone(),
        "tcp" => service.tcp.to_string(),
        "udp" => service.udp.to_string(),
        "status" => service.status.clone(),
        _ => String::new(),
    }
}
