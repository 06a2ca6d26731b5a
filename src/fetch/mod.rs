// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::warn;

/// Wikipedia page listing well-known port assignments.
pub const PORTS_URL: &str = "https://en.wikipedia.org/wiki/List_of_TCP_and_UDP_port_numbers";

/// GET `url` and return the body on HTTP 200.
///
/// Any other status yields `None` with a logged diagnostic; only
/// transport-level failures surface as errors.
pub fn fetch_page(client: &Client, url: &str) -> Result<Option<String>> {
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("GET {}", url))?;

    if resp.status() != StatusCode::OK {
        warn!(%url, status = %resp.status(), "failed to retrieve page");
        return Ok(None);
    }

    let body = resp
        .text()
        .with_context(|| format!("reading body from {}", url))?;
    Ok(Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a throwaway localhost port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                request.extend_from_slice(&chunk[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(resp.as_bytes()).unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn returns_body_on_200() {
        let url = serve_once("200 OK", "<html>hello</html>");
        let client = Client::new();
        let body = fetch_page(&client, &url).unwrap();
        assert_eq!(body.as_deref(), Some("<html>hello</html>"));
    }

    #[test]
    fn non_success_status_yields_none() {
        let url = serve_once("404 Not Found", "missing");
        let client = Client::new();
        assert!(fetch_page(&client, &url).unwrap().is_none());
    }
}
