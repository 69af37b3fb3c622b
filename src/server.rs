//! HTTP surface: `GET /step?count=N` advances the walk and returns the canvas
//! as PNG.
//!
//! Requests are handled one at a time on the thread that calls
//! [`WalkServer::run`]; the server owns its [`Session`] outright.

use log::{debug, error, info, warn};
use rand::RngCore;
use tiny_http::{Header, Method, Request, Response, Server};
use url::Url;

use crate::session::Session;
use crate::{Error, Result, WalkConfig};

/// Status, content type and body of a response, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn png(body: Vec<u8>) -> Self {
        Self { status: 200, content_type: "image/png", body }
    }

    fn text(status: u16, msg: impl Into<String>) -> Self {
        let mut body = msg.into().into_bytes();
        body.push(b'\n');
        Self { status, content_type: "text/plain; charset=utf-8", body }
    }
}

/// Parse the `count` query value. Absent or empty means one step, a
/// negative integer means none.
pub fn parse_count(raw: Option<&str>, max: u64) -> Result<u64> {
    let raw = match raw {
        None | Some("") => return Ok(1),
        Some(v) => v,
    };
    let count: i64 = raw
        .parse()
        .map_err(|_| Error::MalformedCount(raw.to_string()))?;
    let count = count.max(0) as u64;
    if count > max {
        return Err(Error::MalformedCount(format!("{} (limit is {})", raw, max)));
    }
    Ok(count)
}

/// Route one request against the session.
///
/// The walk is only touched once the request is known to be valid.
pub fn respond<R: RngCore>(session: &mut Session<R>, method: &Method, raw_url: &str, max_steps: u64) -> Reply {
    let url = match Url::parse("http://localhost").and_then(|base| base.join(raw_url)) {
        Ok(u) => u,
        Err(e) => return Reply::text(400, format!("bad request target: {}", e)),
    };

    if url.path() != "/step" {
        return Reply::text(404, "not found");
    }
    if *method != Method::Get {
        return Reply::text(405, "method not allowed");
    }

    let raw_count = url
        .query_pairs()
        .find(|(k, _)| k == "count")
        .map(|(_, v)| v.into_owned());
    let count = match parse_count(raw_count.as_deref(), max_steps) {
        Ok(c) => c,
        Err(e) => {
            warn!("rejecting /step: {}", e);
            return Reply::text(400, e.to_string());
        }
    };

    match session.step_and_render(count) {
        Ok(frame) => {
            debug!("rendered {} bytes after {} steps", frame.content_length(), count);
            Reply::png(frame.png_data)
        }
        Err(e) => {
            error!("unable to encode image: {}", e);
            Reply::text(500, "unable to encode image")
        }
    }
}

pub struct WalkServer {
    server: Server,
    session: Session,
    max_steps: u64,
}

impl WalkServer {
    /// Bind `config.bind` and build a fresh session from `config`.
    pub fn bind(config: &WalkConfig) -> Result<Self> {
        let session = Session::from_config(config)?;
        Self::with_session(&config.bind, session, config.max_steps_per_request)
    }

    pub fn with_session(addr: &str, session: Session, max_steps: u64) -> Result<Self> {
        let server = Server::http(addr)
            .map_err(|e| Error::NetworkError(format!("failed to bind {}: {}", addr, e)))?;
        info!("listening on http://{}", server.server_addr());
        Ok(Self { server, session, max_steps })
    }

    /// Bound address, e.g. `127.0.0.1:8080`.
    pub fn server_addr(&self) -> String {
        format!("{}", self.server.server_addr())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Serve requests until the listener shuts down.
    pub fn run(mut self) -> Result<()> {
        for request in self.server.incoming_requests() {
            Self::handle(&mut self.session, self.max_steps, request);
        }
        Ok(())
    }

    /// Block for exactly one request and answer it.
    pub fn handle_one(&mut self) -> Result<()> {
        let request = self
            .server
            .recv()
            .map_err(|e| Error::NetworkError(e.to_string()))?;
        Self::handle(&mut self.session, self.max_steps, request);
        Ok(())
    }

    fn handle(session: &mut Session, max_steps: u64, request: Request) {
        debug!("{} {}", request.method(), request.url());
        let reply = respond(session, request.method(), request.url(), max_steps);

        // always send Content-Length, never chunked
        let mut response = Response::from_data(reply.body)
            .with_status_code(reply.status)
            .with_chunked_threshold(usize::MAX);
        match Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
            Ok(h) => response = response.with_header(h),
            Err(()) => warn!("invalid content type {}", reply.content_type),
        }
        if let Err(e) = request.respond(response) {
            error!("unable to write response: {}", e);
        }
    }
}
