use core::future::Future;
use core::pin::pin;
use futures_util::future::{Either, select};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use jeopardy_core::{CategoryId, CategorySummary, GameError, RawClue, Result, TriviaSource};
use jeopardy_protocol as protocol;

pub(crate) const DEFAULT_API_BASE: &str = "https://jservice.io/api";
pub(crate) const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Trivia service reached through the browser's fetch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
    timeout_ms: u32,
}

impl HttpTriviaSource {
    pub(crate) fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let request = async {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|err| GameError::NetworkFailure(err.to_string()))?;
            if !response.ok() {
                return Err(status_error(response.status(), &response.status_text(), url));
            }
            response
                .text()
                .await
                .map_err(|err| GameError::NetworkFailure(err.to_string()))
        };
        with_timeout(request, self.timeout_ms).await
    }
}

fn status_error(status: u16, status_text: &str, url: &str) -> GameError {
    GameError::NetworkFailure(format!("{} {} from {}", status, status_text, url))
}

/// The browser keeps the request going, its response is just never read.
async fn with_timeout<T>(request: impl Future<Output = Result<T>>, millis: u32) -> Result<T> {
    match select(pin!(request), pin!(TimeoutFuture::new(millis))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::warn!("request timed out after {} ms", millis);
            Err(GameError::Timeout { millis })
        }
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn categories(&self, count: u16) -> Result<Vec<CategorySummary>> {
        let body = self
            .get_text(&protocol::categories_path(&self.base_url, count))
            .await?;
        protocol::decode_categories(&body).map_err(|err| GameError::InvalidResponse(err.to_string()))
    }

    async fn clues(&self, category: CategoryId) -> Result<Vec<RawClue>> {
        let body = self
            .get_text(&protocol::clues_path(&self.base_url, category))
            .await?;
        protocol::decode_clues(&body).map_err(|err| GameError::InvalidResponse(err.to_string()))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use futures_util::future;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn request_that_never_answers_times_out() {
        let result = with_timeout(future::pending::<Result<()>>(), 1).await;
        assert_eq!(result, Err(GameError::Timeout { millis: 1 }));
    }

    #[wasm_bindgen_test]
    async fn quick_request_wins_the_race() {
        let result = with_timeout(future::ready(Ok(7)), 1_000).await;
        assert_eq!(result, Ok(7));
    }

    #[wasm_bindgen_test]
    async fn request_failure_passes_through() {
        let failure = GameError::NetworkFailure("connection refused".into());
        let result = with_timeout(future::ready(Err::<(), _>(failure.clone())), 1_000).await;
        assert_eq!(result, Err(failure));
    }
}
