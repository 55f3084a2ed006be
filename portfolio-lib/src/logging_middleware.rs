use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        log!(
            self.level,
            "fetching {} {}",
            request.method(),
            request.url()
        );
        let started = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = started.elapsed();
        match result.as_ref() {
            Ok(response) => {
                log!(
                    self.level,
                    "upstream answered {} after {elapsed:?}",
                    response.status()
                );
            }
            Err(e) => {
                log!(self.level, "request failed after {elapsed:?}: {e:?}");
            }
        }
        result
    }
}
