use crate::core::categorize::categorize;
use crate::core::coordinator::FetchCoordinator;
use crate::core::report::{render_detail, render_grouped};
use crate::domain::ports::{ConfigProvider, PokeSource};
use std::sync::Arc;

/// Orchestrates the full run: listing, bounded detail fan-out,
/// categorization, and rendering. Never fails — a run where every fetch
/// failed just produces an empty report.
pub struct FetchEngine<S: PokeSource + 'static> {
    source: Arc<S>,
}

impl<S: PokeSource + 'static> FetchEngine<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn run_batch<C: ConfigProvider>(&self, config: &C) -> String {
        tracing::info!("Fetching up to {} Pokémon...", config.limit());
        let references = self.source.fetch_list(config.limit()).await;
        tracing::info!("Listing returned {} Pokémon", references.len());

        let coordinator = FetchCoordinator::new(Arc::clone(&self.source), config.workers());
        let fetched = coordinator.fetch_all(references).await;
        tracing::info!("Fetched details for {} Pokémon", fetched.len());

        let categories = categorize(fetched);
        render_grouped(&categories)
    }

    pub async fn run_single(&self, selector: &str) -> String {
        match self.source.fetch_by_name(selector).await {
            Some(pokemon) => render_detail(&pokemon),
            None => "No Pokémon details available.\n".to_string(),
        }
    }
}
