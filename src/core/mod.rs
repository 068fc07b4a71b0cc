pub mod categorize;
pub mod client;
pub mod coordinator;
pub mod engine;
pub mod report;

pub use crate::domain::model::{Pokemon, PokemonRef, TypeMap};
pub use crate::domain::ports::{ConfigProvider, PokeSource};
pub use crate::utils::error::Result;
