use crate::domain::model::{Pokemon, TypeMap};
use std::collections::HashMap;

/// Groups Pokémon by lowercased type name. A Pokémon with several types is
/// bucketed once per type; one with no types lands in no bucket.
pub fn categorize(pokemon: Vec<Pokemon>) -> TypeMap {
    let mut categories: TypeMap = HashMap::new();

    for details in pokemon {
        for type_name in details.type_names() {
            categories
                .entry(type_name.to_ascii_lowercase())
                .or_default()
                .push(details.clone());
        }
    }

    categories
}
