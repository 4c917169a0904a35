// crates/munidb-core/src/importance.rs

//! Importance scoring: a ranking boost for well-known or short-named
//! places, independent of textual match quality. Used purely as a
//! tie-breaker on top of the base match score, never as a filter.

use crate::text::fold_key;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Bonus granted to members of [`IMPORTANT_CITIES`].
pub const IMPORTANT_CITY_BONUS: u32 = 5_000;

/// Major cities that should always outrank incidental short matches.
///
/// Folded form. Hardcoded domain knowledge, not derived from the dataset.
static IMPORTANT_CITIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "madrid",
        "barcelona",
        "valencia",
        "sevilla",
        "zaragoza",
        "malaga",
        "murcia",
        "palma",
        "bilbao",
        "alicante",
        "cordoba",
        "valladolid",
        "vigo",
        "gijon",
        "granada",
        "elche",
        "oviedo",
        "badalona",
        "cartagena",
        "terrassa",
        "jerez de la frontera",
        "sabadell",
        "mostoles",
        "santa cruz de tenerife",
        "pamplona",
        "almeria",
        "alcala de henares",
        "fuenlabrada",
        "leganes",
        "san sebastian",
        "getafe",
        "burgos",
        "santander",
        "albacete",
        "alcorcon",
        "logrono",
        "badajoz",
        "salamanca",
        "huelva",
        "lleida",
        "marbella",
        "leon",
        "cadiz",
        "tarragona",
        "toledo",
        "a coruna",
        "girona",
        "caceres",
    ]
    .into_iter()
    .collect()
});

/// Integer importance bonus for a place's display name.
///
/// Membership in the well-known set wins outright; otherwise short names
/// get a graded boost, since short names correlate with large cities in
/// this locale.
pub fn importance_bonus(name: &str) -> u32 {
    if IMPORTANT_CITIES.contains(fold_key(name).as_str()) {
        return IMPORTANT_CITY_BONUS;
    }
    match name.chars().count() {
        0..=6 => 1_000,
        7..=9 => 500,
        10..=12 => 200,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_city_gets_flat_bonus() {
        assert_eq!(importance_bonus("Madrid"), IMPORTANT_CITY_BONUS);
        // Accents in the display name do not defeat membership.
        assert_eq!(importance_bonus("Málaga"), IMPORTANT_CITY_BONUS);
    }

    #[test]
    fn unknown_names_graded_by_length() {
        assert_eq!(importance_bonus("Toro"), 1_000);
        assert_eq!(importance_bonus("Comillas"), 500);
        assert_eq!(importance_bonus("Torrelavega"), 200);
        assert_eq!(importance_bonus("Barbadillo del Mercado"), 0);
    }

    #[test]
    fn length_uses_raw_display_name() {
        // 11 chars with the accent counted as one char.
        assert_eq!(importance_bonus("Benalmádena"), 200);
    }
}
