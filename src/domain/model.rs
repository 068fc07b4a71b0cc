use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry from the paginated listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonList {
    #[serde(default)]
    pub results: Vec<PokemonRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Detail payload for one Pokémon. Fields the API may omit are optional;
/// unknown fields in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub base_experience: Option<u64>,
    pub height: Option<u64>,
    pub weight: Option<u64>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }

    pub fn ability_names(&self) -> Vec<String> {
        self.abilities.iter().map(|a| a.ability.name.clone()).collect()
    }

    pub fn base_stat(&self, stat_name: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat_name)
            .map(|s| s.base_stat)
    }
}

/// Pokémon grouped by lowercased type name. Intra-bucket order follows
/// fetch completion order and carries no meaning.
pub type TypeMap = HashMap<String, Vec<Pokemon>>;
