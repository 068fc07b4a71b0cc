use crate::domain::model::{Pokemon, PokemonRef};
use crate::domain::ports::PokeSource;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fans out detail fetches with bounded parallelism. One task per reference,
/// at most `width` requests in flight; results are collected in completion
/// order and failed fetches are dropped without affecting their siblings.
pub struct FetchCoordinator<S: PokeSource + 'static> {
    source: Arc<S>,
    width: usize,
}

impl<S: PokeSource + 'static> FetchCoordinator<S> {
    pub fn new(source: Arc<S>, width: usize) -> Self {
        Self {
            source,
            width: width.max(1),
        }
    }

    pub async fn fetch_all(&self, references: Vec<PokemonRef>) -> Vec<Pokemon> {
        let total = references.len();
        let semaphore = Arc::new(Semaphore::new(self.width));
        let mut tasks: JoinSet<Option<Pokemon>> = JoinSet::new();

        for reference in references {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                // Permit is held across the whole request; excess references
                // queue here until a worker slot frees up.
                let _permit = semaphore.acquire_owned().await.ok()?;
                source.fetch_detail(&reference).await
            });
        }

        let mut fetched = Vec::with_capacity(total);
        let mut failures = 0usize;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(pokemon)) => fetched.push(pokemon),
                Ok(None) => failures += 1,
                Err(e) => {
                    failures += 1;
                    tracing::error!("Detail fetch task failed to complete: {}", e);
                }
            }
        }

        if failures > 0 {
            tracing::warn!("{} of {} detail fetches failed", failures, total);
        }

        fetched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NamedResource, TypeSlot};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<String>>>);

    impl CapturedLogs {
        fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct MessageVisitor(String);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CapturedLogs {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }

    struct ScriptedSource {
        failing: HashSet<String>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(failing: &[&str]) -> Self {
            Self {
                failing: failing.iter().map(|s| s.to_string()).collect(),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        fn observed_max(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PokeSource for ScriptedSource {
        async fn fetch_list(&self, _limit: usize) -> Vec<PokemonRef> {
            Vec::new()
        }

        async fn fetch_detail(&self, reference: &PokemonRef) -> Option<Pokemon> {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(&reference.name) {
                return None;
            }
            Some(Pokemon {
                id: 1,
                name: reference.name.clone(),
                types: vec![TypeSlot {
                    kind: NamedResource {
                        name: "normal".to_string(),
                    },
                }],
                abilities: Vec::new(),
                base_experience: None,
                height: None,
                weight: None,
                stats: Vec::new(),
                sprites: Default::default(),
            })
        }

        async fn fetch_by_name(&self, _name_or_id: &str) -> Option<Pokemon> {
            None
        }
    }

    fn refs(names: &[&str]) -> Vec<PokemonRef> {
        names
            .iter()
            .map(|n| PokemonRef {
                name: n.to_string(),
                url: format!("http://localhost/pokemon/{}/", n),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_failed_fetches_are_dropped_not_fatal() {
        let source = Arc::new(ScriptedSource::new(&["b", "d"]));
        let coordinator = FetchCoordinator::new(source, 3);

        let fetched = coordinator.fetch_all(refs(&["a", "b", "c", "d", "e"])).await;

        assert_eq!(fetched.len(), 3);
        let names: HashSet<String> = fetched.into_iter().map(|p| p.name).collect();
        let expected: HashSet<String> = ["a", "c", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_yield_equals_batch_minus_failures_for_any_width() {
        let names = ["a", "b", "c", "d", "e"];
        for width in 1..=names.len() {
            let source = Arc::new(ScriptedSource::new(&["c"]));
            let coordinator = FetchCoordinator::new(source, width);

            let fetched = coordinator.fetch_all(refs(&names)).await;
            assert_eq!(fetched.len(), names.len() - 1, "width {}", width);
        }
    }

    #[tokio::test]
    async fn test_empty_batch_yields_empty_output() {
        let source = Arc::new(ScriptedSource::new(&[]));
        let coordinator = FetchCoordinator::new(source, 10);

        let fetched = coordinator.fetch_all(Vec::new()).await;
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_all_failures_yield_empty_output() {
        let source = Arc::new(ScriptedSource::new(&["a", "b", "c"]));
        let coordinator = FetchCoordinator::new(source, 2);

        let fetched = coordinator.fetch_all(refs(&["a", "b", "c"])).await;
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_in_flight_requests_never_exceed_width() {
        let source = Arc::new(ScriptedSource::new(&[]));
        let coordinator = FetchCoordinator::new(Arc::clone(&source), 2);

        let fetched = coordinator
            .fetch_all(refs(&["a", "b", "c", "d", "e", "f"]))
            .await;

        assert_eq!(fetched.len(), 6);
        assert!(source.observed_max() <= 2);
    }

    #[tokio::test]
    async fn test_failure_summary_reports_exact_failed_count() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::registry().with(logs.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = Arc::new(ScriptedSource::new(&["b", "d"]));
        let coordinator = FetchCoordinator::new(source, 2);
        let fetched = coordinator.fetch_all(refs(&["a", "b", "c", "d", "e"])).await;
        assert_eq!(fetched.len(), 3);

        let messages = logs.messages();
        assert!(
            messages
                .iter()
                .any(|m| m.contains("2 of 5 detail fetches failed")),
            "missing summary in {:?}",
            messages
        );

        // A fully successful batch emits no summary.
        let source = Arc::new(ScriptedSource::new(&[]));
        let coordinator = FetchCoordinator::new(source, 2);
        let fetched = coordinator.fetch_all(refs(&["a", "b"])).await;
        assert_eq!(fetched.len(), 2);

        let messages = logs.messages();
        assert_eq!(
            messages
                .iter()
                .filter(|m| m.contains("detail fetches failed"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_zero_width_is_clamped_to_one() {
        let source = Arc::new(ScriptedSource::new(&[]));
        let coordinator = FetchCoordinator::new(Arc::clone(&source), 0);

        let fetched = coordinator.fetch_all(refs(&["a", "b"])).await;
        assert_eq!(fetched.len(), 2);
        assert_eq!(source.observed_max(), 1);
    }
}
