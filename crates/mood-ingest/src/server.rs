//! HTTP ingestion endpoint.
//!
//! A `tiny_http` listener served one request at a time. `recv` and body reads
//! block, so they run on the blocking pool; routing and storage stay on the
//! async side. Routes:
//!
//! - `POST /ingest` batch ingestion under the external feed identity
//! - `GET /api/summary?owner=<name>` per-label counts
//! - `GET /api/history?owner=<name>&limit=<n>` newest records first
//! - `GET /health`

use std::future::Future;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Value, json};
use tiny_http::{Header, Method, Request, Response, Server};

use mood_core::identity::Owner;
use mood_core::responses::{ErrorResponse, IngestResponse};
use mood_sentiment::PolarityScorer;

use crate::error::IngestError;
use crate::pipeline::Ingestor;

/// How long one blocking `recv` waits before yielding back to the loop.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A status code plus JSON body, independent of the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn json(status: u16, body: &impl Serialize) -> Self {
        let body = serde_json::to_value(body).unwrap_or(Value::Null);
        Self { status, body }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, &ErrorResponse::new(message))
    }
}

/// Request body as read off the wire.
#[derive(Debug)]
pub enum Body {
    Bytes(Vec<u8>),
    TooLarge,
}

pub struct IngestServer<S = mood_sentiment::LexiconScorer> {
    server: Arc<Server>,
    ingestor: Ingestor<S>,
    max_body_bytes: usize,
    history_limit: u32,
}

impl<S: PolarityScorer> IngestServer<S> {
    /// Bind the listener. Use port 0 to pick a free port.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Server` if the address cannot be bound.
    pub fn bind(
        addr: &str,
        ingestor: Ingestor<S>,
        max_body_bytes: usize,
        history_limit: u32,
    ) -> Result<Self, IngestError> {
        let server = Server::http(addr)
            .map_err(|e| IngestError::Server(format!("failed to bind {addr}: {e}")))?;
        Ok(Self {
            server: Arc::new(server),
            ingestor,
            max_body_bytes,
            history_limit,
        })
    }

    /// The bound socket address, if listening on IP.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` if the listener fails.
    pub async fn serve(self, shutdown: impl Future<Output = ()>) -> Result<(), IngestError> {
        tracing::info!(addr = ?self.local_addr(), "ingestion server listening");
        tokio::pin!(shutdown);

        loop {
            let server = Arc::clone(&self.server);
            let max = self.max_body_bytes;
            let mut next = tokio::task::spawn_blocking(move || receive(&server, max));

            tokio::select! {
                () = &mut shutdown => {
                    self.server.unblock();
                    // A request the pending receive already took still gets its reply.
                    if let Ok(Ok(Some((request, body)))) = next.await {
                        self.handle(request, body).await;
                    }
                    tracing::info!("ingestion server stopped");
                    return Ok(());
                }
                joined = &mut next => {
                    let received = joined
                        .map_err(|e| IngestError::Server(format!("receive task failed: {e}")))??;
                    if let Some((request, body)) = received {
                        self.handle(request, body).await;
                    }
                }
            }
        }
    }

    async fn handle(&self, request: Request, body: Body) {
        let method = request.method().clone();
        let url = request.url().to_string();
        let reply = route(
            &self.ingestor,
            &method,
            &url,
            body,
            self.history_limit,
        )
        .await;
        tracing::debug!(%method, %url, status = reply.status, "handled request");

        let responded = tokio::task::spawn_blocking(move || respond(request, &reply)).await;
        match responded {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "failed to write response"),
            Err(e) => tracing::warn!(error = %e, "response task failed"),
        }
    }
}

/// Dispatch one request to its handler.
pub async fn route<S: PolarityScorer>(
    ingestor: &Ingestor<S>,
    method: &Method,
    url: &str,
    body: Body,
    history_limit: u32,
) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    match (method, path) {
        (Method::Post, "/ingest") => ingest(ingestor, body).await,
        (Method::Get, "/api/summary") => summary(ingestor, query).await,
        (Method::Get, "/api/history") => history(ingestor, query, history_limit).await,
        (Method::Get, "/health") => Reply::json(200, &json!({"status": "ok"})),
        _ => Reply::error(404, "Not found"),
    }
}

async fn ingest<S: PolarityScorer>(ingestor: &Ingestor<S>, body: Body) -> Reply {
    let Body::Bytes(bytes) = body else {
        return Reply::error(413, "Payload too large");
    };
    match ingestor.ingest_json(&bytes).await {
        Ok(report) => Reply::json(200, &IngestResponse::from(&report)),
        Err(IngestError::NoData) => Reply::error(400, "No data received"),
        Err(IngestError::Malformed(kind)) => {
            tracing::debug!(kind, "rejected non-array batch");
            Reply::error(400, "Malformed payload")
        }
        Err(e) => internal(&e),
    }
}

async fn summary<S: PolarityScorer>(ingestor: &Ingestor<S>, query: &str) -> Reply {
    let owner = match owner_param(query) {
        Ok(owner) => owner,
        Err(reply) => return reply,
    };
    match ingestor.summary(&owner).await {
        Ok(summary) => Reply::json(200, &summary),
        Err(e) => internal(&e),
    }
}

async fn history<S: PolarityScorer>(
    ingestor: &Ingestor<S>,
    query: &str,
    default_limit: u32,
) -> Reply {
    let owner = match owner_param(query) {
        Ok(owner) => owner,
        Err(reply) => return reply,
    };
    let limit = match query_param(query, "limit") {
        None => default_limit,
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) => n,
            Err(_) => return Reply::error(400, "Invalid limit"),
        },
    };
    match ingestor.history(&owner, limit).await {
        Ok(records) => Reply::json(200, &records),
        Err(e) => internal(&e),
    }
}

fn internal(error: &IngestError) -> Reply {
    tracing::error!(%error, "request failed");
    Reply::error(500, "Internal error")
}

fn owner_param(query: &str) -> Result<Owner, Reply> {
    let raw = query_param(query, "owner").ok_or_else(|| Reply::error(400, "Missing owner"))?;
    Owner::from_storage_key(&raw).map_err(|_| Reply::error(400, "Invalid owner"))
}

/// First value of `key` in a query string, percent-decoded.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| {
            urlencoding::decode(&v.replace('+', " "))
                .ok()
                .map(std::borrow::Cow::into_owned)
        })
}

/// Wait up to [`POLL_INTERVAL`] for a request and read its body.
fn receive(server: &Server, max_body_bytes: usize) -> Result<Option<(Request, Body)>, IngestError> {
    let Some(mut request) = server.recv_timeout(POLL_INTERVAL)? else {
        return Ok(None);
    };
    let body = read_body(&mut request, max_body_bytes)?;
    Ok(Some((request, body)))
}

fn read_body(request: &mut Request, max_body_bytes: usize) -> Result<Body, IngestError> {
    if request.body_length().is_some_and(|len| len > max_body_bytes) {
        return Ok(Body::TooLarge);
    }
    let mut bytes = Vec::new();
    let limit = u64::try_from(max_body_bytes).unwrap_or(u64::MAX).saturating_add(1);
    request.as_reader().take(limit).read_to_end(&mut bytes)?;
    if bytes.len() > max_body_bytes {
        return Ok(Body::TooLarge);
    }
    Ok(Body::Bytes(bytes))
}

fn respond(request: Request, reply: &Reply) -> std::io::Result<()> {
    let mut response = Response::from_string(reply.body.to_string()).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response.add_header(header);
    }
    request.respond(response)
}
