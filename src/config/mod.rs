use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pokefetch")]
#[command(about = "Fetch and categorize Pokémon using the PokéAPI")]
pub struct CliConfig {
    #[arg(long, help = "Fetch details of a specific Pokémon by name or ID")]
    pub pokemon: Option<String>,

    #[arg(long, default_value = "150", help = "Number of Pokémon to fetch")]
    pub limit: usize,

    #[arg(
        long,
        default_value = "10",
        help = "Number of concurrent detail requests"
    )]
    pub threads: usize,

    #[arg(long, default_value = "https://pokeapi.co/api/v2")]
    pub api_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn workers(&self) -> usize {
        self.threads
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("limit", self.limit, 1)?;
        validate_range("threads", self.threads, 1, 100)?;
        Ok(())
    }
}
