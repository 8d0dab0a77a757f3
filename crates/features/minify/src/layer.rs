//! Tower [`Layer`] and [`Service`] that minify response bodies.
//!
//! Requests flow through untouched. On the way back a response is buffered and
//! minified only after every cheap check has passed:
//!
//! 1. the request does not match the skip predicate;
//! 2. the status is `2xx` other than `204 No Content` and `206 Partial Content`,
//!    and there is no `Content-Range` header;
//! 3. a `Content-Type` is present and parses;
//! 4. the body carries no `Content-Encoding` other than `identity`;
//! 5. the media type maps to an enabled kind;
//! 6. the body fits in `max_body_bytes`, when a limit is set.

use crate::content::{ContentKind, parse_media_type};
use crate::engine::MinifyEngine;
use axum::body::{Body, to_bytes};
use axum::response::IntoResponse;
use http::header::{CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Request, Response, StatusCode, request::Parts};
use http_body::Body as _;
use slim_domain::config::MinifyConfig;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug, error, warn};

type SkipPredicate = Arc<dyn Fn(&Parts) -> bool + Send + Sync>;

/// Applies [`Minify`] to every response of the wrapped service.
#[derive(Clone)]
pub struct MinifyLayer {
    engine: Arc<MinifyEngine>,
    skip: Option<SkipPredicate>,
}

impl MinifyLayer {
    #[must_use]
    pub fn new(config: MinifyConfig) -> Self {
        Self::from_engine(Arc::new(MinifyEngine::new(&config)))
    }

    /// Shares an existing engine, e.g. between several routers.
    #[must_use]
    pub const fn from_engine(engine: Arc<MinifyEngine>) -> Self {
        Self { engine, skip: None }
    }

    /// Bypasses minification for requests matching `predicate`.
    ///
    /// The predicate sees the request head before it reaches the inner service.
    #[must_use]
    pub fn skip_if<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Parts) -> bool + Send + Sync + 'static,
    {
        self.skip = Some(Arc::new(predicate));
        self
    }

    #[must_use]
    pub const fn engine(&self) -> &Arc<MinifyEngine> {
        &self.engine
    }
}

impl Default for MinifyLayer {
    fn default() -> Self {
        Self::new(MinifyConfig::default())
    }
}

impl fmt::Debug for MinifyLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinifyLayer")
            .field("engine", &self.engine)
            .field("skip", &self.skip.is_some())
            .finish()
    }
}

impl<S> Layer<S> for MinifyLayer {
    type Service = Minify<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Minify { inner, engine: Arc::clone(&self.engine), skip: self.skip.clone() }
    }
}

/// Middleware produced by [`MinifyLayer`].
#[derive(Clone)]
pub struct Minify<S> {
    inner: S,
    engine: Arc<MinifyEngine>,
    skip: Option<SkipPredicate>,
}

impl<S: fmt::Debug> fmt::Debug for Minify<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Minify")
            .field("inner", &self.inner)
            .field("engine", &self.engine)
            .field("skip", &self.skip.is_some())
            .finish()
    }
}

impl<S, B> Service<Request<B>> for Minify<S>
where
    S: Service<Request<B>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        // The clone that was polled ready is the one that must be called.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let (parts, body) = request.into_parts();
        let skip = self.skip.as_ref().is_some_and(|predicate| predicate(&parts));
        let request = Request::from_parts(parts, body);
        let engine = Arc::clone(&self.engine);

        Box::pin(async move {
            let response = inner.call(request).await?;
            if skip {
                return Ok(response);
            }
            Ok(minify_response(&engine, response).await)
        })
    }
}

async fn minify_response(engine: &MinifyEngine, response: Response<Body>) -> Response<Body> {
    if !is_complete_success(&response) {
        return response;
    }

    let Some(kind) = eligible_kind(engine, response.headers()) else {
        return response;
    };

    if let Some(limit) = engine.max_body_bytes() {
        let limit = u64::try_from(limit).unwrap_or(u64::MAX);
        let upper =
            response.body().size_hint().upper().or_else(|| content_length(response.headers()));
        if upper.is_none_or(|len| len > limit) {
            debug!(%kind, limit, "Response body over the minify limit, passing through");
            return response;
        }
    }

    let (mut parts, body) = response.into_parts();
    let original = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(%kind, error = %err, "Failed to read response body for minification");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        },
    };

    match engine.shrink(kind, &original) {
        Ok(Some(minified)) => {
            debug!(%kind, before = original.len(), after = minified.len(), "Response minified");
            parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(minified.len()));
            Response::from_parts(parts, Body::from(minified))
        },
        Ok(None) => Response::from_parts(parts, Body::from(original)),
        Err(err) => {
            if !engine.suppress_warnings() {
                warn!(%kind, error = %err, "Minification failed, sending original body");
            }
            Response::from_parts(parts, Body::from(original))
        },
    }
}

/// A full `2xx` body. Partial content is never rewritten, since `Content-Range`
/// describes the original bytes.
fn is_complete_success(response: &Response<Body>) -> bool {
    let status = response.status();
    status.is_success()
        && status != StatusCode::NO_CONTENT
        && status != StatusCode::PARTIAL_CONTENT
        && !response.headers().contains_key(CONTENT_RANGE)
}

/// Picks the enabled kind for a response, or `None` if it must pass through.
fn eligible_kind(engine: &MinifyEngine, headers: &HeaderMap) -> Option<ContentKind> {
    let content_type = headers.get(CONTENT_TYPE)?;

    let media_type = match content_type.to_str().map(parse_media_type) {
        Ok(Ok(media_type)) => media_type,
        Ok(Err(err)) => {
            if !engine.suppress_warnings() {
                warn!(?content_type, error = %err, "Unparsable Content-Type, skipping minification");
            }
            return None;
        },
        Err(err) => {
            if !engine.suppress_warnings() {
                warn!(?content_type, error = %err, "Non-ASCII Content-Type, skipping minification");
            }
            return None;
        },
    };

    if is_encoded(headers) {
        return None;
    }

    engine.kind_for(&media_type)
}

fn is_encoded(headers: &HeaderMap) -> bool {
    headers.get_all(CONTENT_ENCODING).iter().any(|value| {
        value.to_str().map_or(true, |coding| {
            coding.split(',').any(|coding| {
                let coding = coding.trim();
                !coding.is_empty() && !coding.eq_ignore_ascii_case("identity")
            })
        })
    })
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers.get(CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}
