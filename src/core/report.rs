use crate::domain::model::{Pokemon, TypeMap};

const NOT_AVAILABLE: &str = "N/A";

/// Stat names the detail view always shows, present in the payload or not.
const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn join_capitalized(names: &[String]) -> String {
    if names.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    names
        .iter()
        .map(|n| capitalize(n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn number_or_na(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string())
}

fn write_summary(out: &mut String, pokemon: &Pokemon) {
    out.push_str(&format!("🔹 Name: {}\n", capitalize(&pokemon.name)));
    out.push_str(&format!(
        "🔹 Types: {}\n",
        join_capitalized(&pokemon.type_names())
    ));
    out.push_str(&format!(
        "🔹 Abilities: {}\n",
        join_capitalized(&pokemon.ability_names())
    ));
    out.push_str(&format!(
        "🔹 Base Experience: {}, Height: {}, Weight: {}\n",
        number_or_na(pokemon.base_experience),
        number_or_na(pokemon.height),
        number_or_na(pokemon.weight)
    ));
    out.push('\n');
}

/// Renders the grouped report. Categories come out in sorted-name order so
/// output is reproducible even though bucket contents follow fetch
/// completion order.
pub fn render_grouped(categories: &TypeMap) -> String {
    let mut out = String::new();

    let mut type_names: Vec<&String> = categories.keys().collect();
    type_names.sort();

    for type_name in type_names {
        out.push_str(&format!("🔹 Type: {}\n", capitalize(type_name)));
        for pokemon in &categories[type_name] {
            write_summary(&mut out, pokemon);
        }
    }

    out
}

/// Single-record view: every field, with an explicit N/A for anything the
/// payload left out.
pub fn render_detail(pokemon: &Pokemon) -> String {
    let mut out = String::new();

    out.push_str(&format!("🔹 Name: {}\n", capitalize(&pokemon.name)));
    out.push_str(&format!("🔹 Id: {}\n", pokemon.id));
    out.push_str(&format!(
        "🔹 Types: {}\n",
        join_capitalized(&pokemon.type_names())
    ));
    out.push_str(&format!(
        "🔹 Abilities: {}\n",
        join_capitalized(&pokemon.ability_names())
    ));
    out.push_str(&format!(
        "🔹 Base Experience: {}, Height: {}, Weight: {}\n",
        number_or_na(pokemon.base_experience),
        number_or_na(pokemon.height),
        number_or_na(pokemon.weight)
    ));

    out.push_str("🔹 Stats:\n");
    for stat_name in STAT_NAMES {
        let value = pokemon
            .base_stat(stat_name)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string());
        out.push_str(&format!("   - {}: {}\n", capitalize(stat_name), value));
    }

    out.push_str(&format!(
        "🔹 Sprite: {}\n",
        pokemon
            .sprites
            .front_default
            .as_deref()
            .unwrap_or(NOT_AVAILABLE)
    ));

    out
}
