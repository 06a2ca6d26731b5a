// src/bin/svdb.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::Path;
use svdb_scrape::db::{self, Service};
use svdb_scrape::query;
use tracing_subscriber::{fmt, EnvFilter};

/// svdb, the service database.
#[derive(Parser, Debug)]
#[command(name = "svdb", about = "svdb, the service database.")]
struct Cli {
    /// Query by port number(s) (comma separated list of ports)
    #[arg(short = 'p', value_name = "PORTS")]
    port: Option<String>,

    /// Query the service database by regular expression pattern matching
    #[arg(short = 'X', value_name = "PATTERN")]
    pattern: Option<String>,

    /// Output in JSON format
    #[arg(short = 'j')]
    json: bool,

    /// Reduce output to the given fields (port, description, tcp, udp, status)
    #[arg(long, value_name = "FIELDS", value_delimiter = ',')]
    select: Vec<String>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();

    let database = db::load_or_seed(&db::default_path()?, Path::new(db::SEED_FILE))?;

    let matched = match (&cli.port, &cli.pattern) {
        (Some(ports), _) => query::by_port(&database, ports),
        (None, Some(pattern)) => query::by_match(&database, pattern)?,
        (None, None) => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    if !cli.select.is_empty() {
        print_selected(&matched, &cli.select, cli.json)?;
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else {
        print_plain(&matched);
    }
    Ok(())
}

fn print_plain(services: &[Service]) {
    for s in services {
        print_key_val("port", &s.port);
        print_key_val("description", &s.description);
        print_key_val("protocol", s.protocol());
        print_key_val("status", &s.status);
        println!();
    }
}

/// Key column padded so the colons line up; empty values are skipped.
fn print_key_val(key: &str, val: &str) {
    if val.is_empty() {
        return;
    }
    println!("{:<15}: {}", key, val);
}

fn print_selected(services: &[Service], fields: &[String], json: bool) -> Result<()> {
    if json {
        let selected = query::select_fields(services, fields);
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    // A single selected field prints as bare values, one per line.
    if let [field] = fields {
        for s in services {
            println!("{}", query::field_value(s, field));
        }
        return Ok(());
    }

    print_plain(&query::select_fields(services, fields));
    Ok(())
}
