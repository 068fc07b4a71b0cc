use crate::domain::model::{Pokemon, PokemonRef};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn limit(&self) -> usize;
    fn workers(&self) -> usize;
}

/// Fetch boundary. Implementations contain every transport, status, and
/// decode failure: callers only ever see an empty list or an absent record.
#[async_trait]
pub trait PokeSource: Send + Sync {
    async fn fetch_list(&self, limit: usize) -> Vec<PokemonRef>;
    async fn fetch_detail(&self, reference: &PokemonRef) -> Option<Pokemon>;
    async fn fetch_by_name(&self, name_or_id: &str) -> Option<Pokemon>;
}
