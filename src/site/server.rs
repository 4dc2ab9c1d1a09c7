//! Local preview server.
//!
//! Pages are rendered per request from the repository, so edits to the
//! renderers show up on the next restart without a build step. Requests
//! are handled one at a time on the calling thread.

use super::router::{Route, render_route};
use crate::error::{Result, SiteError};
use crate::render::{RenderResult, SiteContext};
use crate::repository::CompanyRepository;
use std::net::SocketAddr;
use std::time::Duration;
use xxhash_rust::xxh3::xxh3_64;

/// What the server sends back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedResponse {
    pub status: u16,
    pub body: String,
    pub etag: Option<String>,
}

/// Strong ETag of a page body.
#[must_use]
pub fn etag_for(body: &str) -> String {
    format!("\"{:016x}\"", xxh3_64(body.as_bytes()))
}

/// Resolve a request without touching the network.
///
/// `GET` and `HEAD` render the route; a matching `If-None-Match` yields 304
/// with an empty body. Other methods get 405.
pub fn respond_to<R: CompanyRepository + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
    method: &str,
    url: &str,
    if_none_match: Option<&str>,
) -> RenderResult<ServedResponse> {
    if !matches!(method, "GET" | "HEAD") {
        return Ok(ServedResponse {
            status: 405,
            body: "Metoda niedozwolona".to_string(),
            etag: None,
        });
    }

    let route = Route::parse(url);
    let page = render_route(repo, ctx, &route)?;
    let etag = etag_for(&page.body);

    if page.status == 200 && if_none_match.is_some_and(|tag| tag.trim() == etag) {
        return Ok(ServedResponse {
            status: 304,
            body: String::new(),
            etag: Some(etag),
        });
    }

    Ok(ServedResponse {
        status: page.status,
        body: page.body,
        etag: Some(etag),
    })
}

/// HTTP listener serving rendered pages.
pub struct PreviewServer {
    server: tiny_http::Server,
}

impl PreviewServer {
    /// Bind to `addr`, e.g. `127.0.0.1:8080` or `127.0.0.1:0`.
    pub fn bind(addr: &str) -> Result<Self> {
        let server = tiny_http::Server::http(addr)
            .map_err(|e| SiteError::config(format!("cannot listen on {addr}: {e}")))?;
        Ok(Self { server })
    }

    /// Address actually bound.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve until the listener shuts down.
    pub fn run<R: CompanyRepository + ?Sized>(&self, repo: &R, ctx: &SiteContext) -> Result<()> {
        for request in self.server.incoming_requests() {
            handle(repo, ctx, request)?;
        }
        Ok(())
    }

    /// Serve a single request if one arrives within `timeout`.
    ///
    /// Returns whether a request was handled.
    pub fn serve_one<R: CompanyRepository + ?Sized>(
        &self,
        repo: &R,
        ctx: &SiteContext,
        timeout: Duration,
    ) -> Result<bool> {
        match self.server.recv_timeout(timeout)? {
            Some(request) => {
                handle(repo, ctx, request)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn header(name: &str, value: &str) -> Option<tiny_http::Header> {
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn handle<R: CompanyRepository + ?Sized>(
    repo: &R,
    ctx: &SiteContext,
    request: tiny_http::Request,
) -> Result<()> {
    let method = request.method().as_str().to_string();
    let url = request.url().to_string();
    let if_none_match = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("If-None-Match"))
        .map(|h| h.value.as_str().to_string());

    let served = respond_to(repo, ctx, &method, &url, if_none_match.as_deref())?;
    tracing::info!("{} {} -> {}", method, url, served.status);

    let mut response =
        tiny_http::Response::from_string(served.body).with_status_code(served.status);
    if let Some(h) = header("Content-Type", "text/html; charset=utf-8") {
        response = response.with_header(h);
    }
    if let Some(h) = served.etag.as_deref().and_then(|tag| header("ETag", tag)) {
        response = response.with_header(h);
    }

    if let Err(e) = request.respond(response) {
        tracing::warn!("Failed to send response for {}: {}", url, e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticRepository;
    use std::io::{Read, Write};

    fn repo() -> StaticRepository {
        StaticRepository::from_json_str(
            r#"{"budowlane": {"name": "Budowlane", "short": "", "items": [
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91}
            ]}}"#,
            "[]",
        )
        .unwrap()
    }

    #[test]
    fn test_etag_is_stable() {
        assert_eq!(etag_for("abc"), etag_for("abc"));
        assert_ne!(etag_for("abc"), etag_for("abd"));
        assert_eq!(etag_for("abc").len(), 18);
    }

    #[test]
    fn test_respond_to_statuses() {
        let ctx = SiteContext::default();
        let repo = repo();

        let ok = respond_to(&repo, &ctx, "GET", "/firma/murator", None).unwrap();
        assert_eq!(ok.status, 200);
        assert!(ok.body.contains("Murator"));

        let cached = respond_to(&repo, &ctx, "GET", "/firma/murator", ok.etag.as_deref()).unwrap();
        assert_eq!(cached.status, 304);
        assert!(cached.body.is_empty());

        let missing = respond_to(&repo, &ctx, "GET", "/firma/brak", None).unwrap();
        assert_eq!(missing.status, 404);
        assert!(missing.body.contains("Nie znaleziono firmy"));

        let post = respond_to(&repo, &ctx, "POST", "/", None).unwrap();
        assert_eq!(post.status, 405);
    }

    #[test]
    fn test_serves_over_http() {
        let server = PreviewServer::bind("127.0.0.1:0").unwrap();
        let addr = server.local_addr().unwrap();

        let client = std::thread::spawn(move || {
            let mut stream = std::net::TcpStream::connect(addr).unwrap();
            stream
                .write_all(b"GET /kategoria/moda HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
                .unwrap();
            let mut response = String::new();
            stream.read_to_string(&mut response).unwrap();
            response
        });

        let handled = server
            .serve_one(&repo(), &SiteContext::default(), Duration::from_secs(5))
            .unwrap();
        assert!(handled);

        let response = client.join().unwrap();
        assert!(response.starts_with("HTTP/1.1 404"));
        assert!(response.contains("Nie znaleziono strony"));
    }
}
