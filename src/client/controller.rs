use tracing::debug;

use super::service::RecommendationService;
use super::view::{RenderTarget, View};

/// The input field a search reads at trigger time.
pub trait QueryInput {
    fn current_value(&self) -> String;
}

/// Orchestrates one search-and-render cycle per trigger.
///
/// Collaborators are injected at construction: the input source, the
/// recommendation service, and the render target. Whoever owns the
/// controller calls [`search`](Self::search) once per user trigger.
///
/// Overlapping cycles are not guarded against; each one overwrites the
/// render target when it completes, so the last writer wins.
pub struct SearchController<I, S, R> {
    input: I,
    service: S,
    target: R,
}

impl<I, S, R> SearchController<I, S, R>
where
    I: QueryInput,
    S: RecommendationService,
    R: RenderTarget,
{
    pub fn new(input: I, service: S, target: R) -> Self {
        Self {
            input,
            service,
            target,
        }
    }

    /// Run one search cycle: read and trim the input, bail out silently
    /// on empty, otherwise show the loading view, query the service, and
    /// replace the render target with the outcome.
    pub async fn search(&mut self) {
        let raw = self.input.current_value();
        let query = raw.trim();
        if query.is_empty() {
            return;
        }

        self.target.render(&View::Loading);

        match self.service.recommend(query).await {
            Ok(titles) if !titles.is_empty() => {
                self.target.render(&View::Results(titles));
            }
            Ok(_) => {
                self.target.render(&View::Empty);
            }
            Err(e) => {
                debug!("Search for {:?} failed: {}", query, e);
                self.target.render(&View::Error(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::service::{ServiceError, FALLBACK_ERROR};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct FixedInput(&'static str);

    impl QueryInput for FixedInput {
        fn current_value(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingTarget(Arc<Mutex<Vec<View>>>);

    impl RecordingTarget {
        fn views(&self) -> Vec<View> {
            self.0.lock().unwrap().clone()
        }
    }

    impl RenderTarget for RecordingTarget {
        fn render(&mut self, view: &View) {
            self.0.lock().unwrap().push(view.clone());
        }
    }

    struct StubService {
        response: Result<Vec<String>, String>,
        calls: Arc<AtomicUsize>,
    }

    impl StubService {
        fn ok(titles: &[&str]) -> Self {
            Self {
                response: Ok(titles.iter().map(|t| t.to_string()).collect()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn err(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl RecommendationService for StubService {
        async fn recommend(&self, _title: &str) -> Result<Vec<String>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(titles) => Ok(titles.clone()),
                Err(message) => Err(ServiceError::Server(message.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_query_does_nothing() {
        let target = RecordingTarget::default();
        let service = StubService::ok(&["Antz (1998)"]);
        let calls = service.calls.clone();
        let mut controller = SearchController::new(FixedInput(""), service, target.clone());

        controller.search().await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(target.views().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_query_does_nothing() {
        let target = RecordingTarget::default();
        let service = StubService::ok(&["Antz (1998)"]);
        let calls = service.calls.clone();
        let mut controller = SearchController::new(FixedInput("   \t "), service, target.clone());

        controller.search().await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(target.views().is_empty());
    }

    #[tokio::test]
    async fn test_success_renders_loading_then_results_in_order() {
        let target = RecordingTarget::default();
        let service = StubService::ok(&["Antz (1998)", "Jumanji (1995)", "Heat (1995)"]);
        let mut controller = SearchController::new(FixedInput(" toy story "), service, target.clone());

        controller.search().await;

        assert_eq!(
            target.views(),
            vec![
                View::Loading,
                View::Results(vec![
                    "Antz (1998)".to_string(),
                    "Jumanji (1995)".to_string(),
                    "Heat (1995)".to_string(),
                ]),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_result_list_renders_empty_view() {
        let target = RecordingTarget::default();
        let service = StubService::ok(&[]);
        let mut controller = SearchController::new(FixedInput("toy story"), service, target.clone());

        controller.search().await;

        assert_eq!(target.views(), vec![View::Loading, View::Empty]);
    }

    #[tokio::test]
    async fn test_service_error_renders_error_view() {
        let target = RecordingTarget::default();
        let service = StubService::err("Movie not found");
        let mut controller = SearchController::new(FixedInput("gone"), service, target.clone());

        controller.search().await;

        assert_eq!(
            target.views(),
            vec![View::Loading, View::Error("Movie not found".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fallback_error_message_passes_through() {
        let target = RecordingTarget::default();
        let service = StubService::err(FALLBACK_ERROR);
        let mut controller = SearchController::new(FixedInput("gone"), service, target.clone());

        controller.search().await;

        assert_eq!(
            target.views(),
            vec![View::Loading, View::Error(FALLBACK_ERROR.to_string())]
        );
    }
}
