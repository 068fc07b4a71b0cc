pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{client::ApiClient, coordinator::FetchCoordinator, engine::FetchEngine};
pub use crate::domain::model::{Pokemon, PokemonRef, TypeMap};
pub use crate::domain::ports::{ConfigProvider, PokeSource};
pub use crate::utils::error::{FetchError, Result};
