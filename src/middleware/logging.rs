use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use http::header::HeaderMap;
use http::StatusCode;
use log::{debug, info};
use reqwest::{Request, Response};
use tower::{Layer, Service};

#[derive(Clone, Debug)]
pub struct LoggingMiddleware {
    verbose: bool,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for LoggingMiddleware
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Service = LoggingMiddlewareService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddlewareService {
            inner,
            verbose: self.verbose,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingMiddlewareService<S> {
    inner: S,
    verbose: bool,
}

const SENSITIVE_HEADERS: &[&str] = &["x-api-key", "authorization", "cookie"];

impl<S> LoggingMiddlewareService<S> {
    fn redact_headers(headers: &HeaderMap) -> String {
        headers
            .iter()
            .map(|(name, value)| {
                let sensitive = value.is_sensitive()
                    || SENSITIVE_HEADERS
                        .iter()
                        .any(|s| name.as_str().eq_ignore_ascii_case(s));
                if sensitive {
                    format!("{}: [REDACTED]", name)
                } else {
                    format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn log_request(method: &str, url: &str, headers: &str, verbose: bool) {
        if verbose {
            debug!("[Whatsgate] >>> {} {} [{}]", method, url, headers);
        } else {
            info!("[Whatsgate] {} {}", method, url);
        }
    }

    fn log_response(status: StatusCode, duration: Duration, verbose: bool) {
        if verbose {
            debug!(
                "[Whatsgate] <<< {} - {} ({:?})",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                duration
            );
        } else {
            info!("[Whatsgate] {} ({:?})", status.as_u16(), duration);
        }
    }
}

impl<S, Error> Service<Request> for LoggingMiddlewareService<S>
where
    S: Service<Request, Response = Response, Error = Error> + Send + Clone + 'static,
    S::Future: Send,
    Error: Send + 'static,
{
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().as_str().to_string();
        let url = req.url().to_string();
        let verbose = self.verbose;
        let headers = if verbose {
            Self::redact_headers(req.headers())
        } else {
            String::new()
        };
        let mut inner = self.inner.clone();

        Box::pin(async move {
            Self::log_request(&method, &url, &headers, verbose);

            let start = Instant::now();
            let response = inner.call(req).await?;

            Self::log_response(response.status(), start.elapsed(), verbose);

            Ok(response)
        })
    }
}
