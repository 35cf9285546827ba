use crate::core::view_state::CatalogViewState;
use crate::domain::model::ListingsResult;
use crate::domain::ports::CatalogSource;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

pub const FETCH_ABANDONED: &str = "Error: catalog fetch ended without a result";

/// Owns the catalog view state. Each fetch runs on a spawned task and its
/// result comes back over a oneshot channel; only the owner applies it.
pub struct CatalogController<S: CatalogSource + 'static> {
    source: Arc<S>,
    state: CatalogViewState,
    pending: Option<oneshot::Receiver<ListingsResult>>,
}

impl<S: CatalogSource + 'static> CatalogController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            state: CatalogViewState::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> &CatalogViewState {
        &self.state
    }

    /// Local changes only (category selection); fetch results go through
    /// `wait_for_update` / `try_apply_pending`.
    pub fn state_mut(&mut self) -> &mut CatalogViewState {
        &mut self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a fetch unless one is already pending. Must be called inside a
    /// tokio runtime. Returns whether a fetch was started.
    pub fn load(&mut self) -> bool {
        if self.pending.is_some() {
            tracing::debug!("Catalog fetch already in flight, ignoring load");
            return false;
        }

        self.state.begin_loading();

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);

        // 任務 panic 或被中止時 tx 會被丟棄，接收端因此得到 Closed
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.fetch().await;
            if tx.send(result).is_err() {
                tracing::debug!("Catalog view dropped before fetch completed");
            }
        });

        true
    }

    /// Waits for the pending fetch and applies it. Returns false when
    /// nothing was in flight.
    pub async fn wait_for_update(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };
        let result = match rx.await {
            Ok(result) => result,
            Err(_) => Self::abandoned(),
        };
        self.state.apply_result(result);
        true
    }

    /// Non-blocking variant for callers polling from their own loop.
    pub fn try_apply_pending(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Self::abandoned(),
        };
        self.pending = None;
        self.state.apply_result(result);
        true
    }

    fn abandoned() -> ListingsResult {
        tracing::warn!("❌ Catalog fetch task ended without sending a result");
        ListingsResult::Failure(FETCH_ABANDONED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view_state::CatalogDisplay;
    use crate::domain::model::{Category, Listing};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    struct MockSource {
        result: ListingsResult,
        calls: Arc<AtomicUsize>,
        gate: Option<Arc<Notify>>,
    }

    impl MockSource {
        fn new(result: ListingsResult) -> Self {
            Self {
                result,
                calls: Arc::new(AtomicUsize::new(0)),
                gate: None,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for MockSource {
        async fn fetch(&self) -> ListingsResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.result.clone()
        }
    }

    fn boat() -> Listing {
        Listing {
            id: 1,
            title: "Boat".to_string(),
            price: "$500".to_string(),
            category: Some("Marine".to_string()),
            description: None,
            image_path: None,
        }
    }

    #[tokio::test]
    async fn test_load_applies_success() {
        let mut controller = CatalogController::new(MockSource::new(ListingsResult::Success(
            vec![boat()],
        )));

        assert!(controller.load());
        assert_eq!(controller.state().display(), CatalogDisplay::Loading);

        assert!(controller.wait_for_update().await);
        assert!(!controller.is_in_flight());
        assert_eq!(controller.state().listings(), &[boat()]);

        controller.state_mut().select(Category::Art);
        assert_eq!(controller.state().display(), CatalogDisplay::Empty);
    }

    #[tokio::test]
    async fn test_second_load_while_in_flight_is_ignored() {
        let gate = Arc::new(Notify::new());
        let mut source = MockSource::new(ListingsResult::Success(vec![boat()]));
        source.gate = Some(Arc::clone(&gate));
        let calls = Arc::clone(&source.calls);

        let mut controller = CatalogController::new(source);
        assert!(controller.load());
        assert!(!controller.load());
        assert!(!controller.try_apply_pending());

        gate.notify_one();
        assert!(controller.wait_for_update().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wait_without_load_returns_false() {
        let mut controller =
            CatalogController::new(MockSource::new(ListingsResult::Success(vec![])));
        assert!(!controller.wait_for_update().await);
        assert!(controller.state().is_loading());
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_listings() {
        let mut controller = CatalogController::new(MockSource::new(ListingsResult::Success(
            vec![boat()],
        )));
        controller.load();
        controller.wait_for_update().await;

        controller.source = Arc::new(MockSource::new(ListingsResult::Failure(
            "Error: offline".to_string(),
        )));
        controller.load();
        controller.wait_for_update().await;

        assert_eq!(controller.state().listings(), &[boat()]);
        assert_eq!(controller.state().error_message(), Some("Error: offline"));
    }

    struct PanickingSource;

    #[async_trait]
    impl CatalogSource for PanickingSource {
        async fn fetch(&self) -> ListingsResult {
            panic!("catalog source blew up");
        }
    }

    #[tokio::test]
    async fn test_panicking_fetch_surfaces_error_and_allows_reload() {
        let mut controller = CatalogController::new(PanickingSource);
        assert!(controller.load());

        let applied = tokio::time::timeout(Duration::from_secs(2), controller.wait_for_update())
            .await
            .expect("wait_for_update should not hang");

        assert!(applied);
        assert!(!controller.is_in_flight());
        assert!(!controller.state().is_loading());
        assert_eq!(controller.state().error_message(), Some(FETCH_ABANDONED));
        assert!(controller.load());
    }

    #[tokio::test]
    async fn test_try_apply_pending_after_panicking_fetch() {
        let mut controller = CatalogController::new(PanickingSource);
        controller.load();

        let mut applied = false;
        for _ in 0..100 {
            if controller.try_apply_pending() {
                applied = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(applied);
        assert!(!controller.is_in_flight());
        assert_eq!(controller.state().error_message(), Some(FETCH_ABANDONED));
    }
}
