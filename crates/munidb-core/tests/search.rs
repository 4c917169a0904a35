//! End-to-end scenarios for the municipality search engine, both over
//! hand-built record sets and over the bundled dataset.

use munidb_core::{MuniDb, Municipio, NameMatch, DEFAULT_LIMIT};

fn muni(id: &str, name: &str, province: &str) -> Municipio {
    Municipio {
        id: id.to_string(),
        name: name.to_string(),
        province: Some(province.to_string()),
    }
}

fn fixture() -> MuniDb {
    MuniDb::from_records(vec![
        muni("45087", "Madridejos", "Toledo"),
        muni("28079", "Madrid", "Madrid"),
        muni("05123", "Madrigal de las Altas Torres", "Ávila"),
        muni("29069", "Marbella", "Málaga"),
        muni("13087", "Valdepeñas", "Ciudad Real"),
        muni("28160", "Valdemorillo", "Madrid"),
        muni("46250", "Valencia", "Valencia"),
        muni("24171", "Valencia de Don Juan", "León"),
        muni("09045", "Barbadillo de Herreros", "Burgos"),
        muni("09046", "Barbadillo del Mercado", "Burgos"),
        muni("37040", "Barbadillo", "Salamanca"),
        muni("29067", "Málaga", "Málaga"),
    ])
}

fn names(results: &[Municipio]) -> Vec<&str> {
    results.iter().map(Municipio::name).collect()
}

#[test]
fn exact_match_ranks_before_prefix_match() {
    let db = fixture();
    let hits = db.search("madrid", 5);
    // Madrid is listed after Madridejos in the dataset; the exact match
    // still wins.
    assert_eq!(names(&hits), vec!["Madrid", "Madridejos"]);
}

#[test]
fn prefix_matches_rank_before_substring_matches() {
    let db = fixture();
    let hits = db.search("barbadillo", 5);
    assert_eq!(hits[0].name(), "Barbadillo");
    assert_eq!(hits.len(), 3);
}

#[test]
fn substring_matches_are_found_within_the_bucket() {
    let db = fixture();
    // Neither name starts with the query; both contain it.
    let hits = db.search("badillo de", 5);
    assert_eq!(
        names(&hits),
        vec!["Barbadillo de Herreros", "Barbadillo del Mercado"]
    );
}

#[test]
fn importance_bonus_overrides_dataset_order() {
    let db = fixture();
    // Valdepeñas and Valdemorillo precede Valencia in the dataset and all
    // three are prefix matches for "val"; the well-known city still wins.
    let hits = db.search("val", 5);
    assert_eq!(hits[0].name(), "Valencia");
}

#[test]
fn equal_scores_keep_dataset_order() {
    let db = fixture();
    let hits = db.search("valde", 5);
    // Same base score, same length bracket: insertion order decides.
    assert_eq!(names(&hits), vec!["Valdepeñas", "Valdemorillo"]);
}

#[test]
fn query_is_trimmed_and_folded() {
    let db = fixture();
    let canonical = db.search("malaga", 3);
    assert_eq!(db.search("  Málaga  ", 3), canonical);
    assert_eq!(db.search("MÁLAGA", 3), canonical);
    assert_eq!(db.search("MáLaGa", 3), canonical);
    assert_eq!(canonical[0].name(), "Málaga");
}

#[test]
fn short_or_empty_queries_return_nothing() {
    let db = fixture();
    for q in ["", "M", "á", "  z  "] {
        assert!(db.search(q, DEFAULT_LIMIT).is_empty(), "query {q:?}");
    }
}

#[test]
fn limit_is_respected() {
    let db = fixture();
    assert_eq!(db.search("ma", 2).len(), 2);
    assert_eq!(db.search("mad", 1).len(), 1);
    // Fewer matches than the cap is fine too.
    assert_eq!(db.search("valencia", 10).len(), 2);
}

#[test]
fn repeated_calls_are_deterministic() {
    let db = fixture();
    let first = db.search("ma", 5);
    for _ in 0..3 {
        assert_eq!(db.search("ma", 5), first);
    }
}

#[test]
fn caller_mutation_does_not_corrupt_the_cache() {
    let db = fixture();
    let mut hits = db.search("madrid", 5);
    hits.clear();
    hits.push(muni("00000", "Bogus", "Nowhere"));
    assert_eq!(names(&db.search("madrid", 5)), vec!["Madrid", "Madridejos"]);
}

#[test]
fn results_survive_a_cache_clear_storm() {
    let db = fixture();
    let before = db.search("madrid", 5);
    for i in 0..120 {
        db.search(&format!("xx{i}"), 5);
    }
    assert_eq!(db.search("madrid", 5), before);
}

#[test]
fn find_by_id_and_name_resolve_records() {
    let db = fixture();
    assert_eq!(db.find_by_id("28079").map(Municipio::name), Some("Madrid"));
    assert!(db.find_by_id("nope").is_none());
    assert_eq!(
        db.find_by_name("malaga").map(Municipio::name),
        Some("Málaga")
    );
}

#[test]
fn stats_count_municipios_and_provinces() {
    let db = fixture();
    let stats = db.stats();
    assert_eq!(stats.municipios, 12);
    assert_eq!(stats.provinces, 9);
}

// --- bundled dataset ---

#[test]
fn bundled_dataset_loads_and_searches() {
    let db = MuniDb::load().expect("bundled dataset loads");
    assert!(db.stats().municipios > 100);

    let hits = db.suggest("madrid");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].name(), "Madrid");
    let madridejos = hits.iter().position(|m| m.is_named("madridejos"));
    assert!(madridejos.map_or(true, |pos| pos > 0));
}

#[test]
fn bundled_dataset_resolves_by_id() {
    let all = munidb_core::municipios().expect("bundled dataset loads");
    let madrid = all.iter().find(|m| m.id() == "28079").expect("Madrid");
    assert_eq!(madrid.name(), "Madrid");
    assert_eq!(madrid.province(), Some("Madrid"));
}

#[test]
fn bundled_dataset_handles_accented_queries() {
    let db = MuniDb::load().expect("bundled dataset loads");
    assert_eq!(db.suggest("CÓRDOBA"), db.suggest("cordoba"));
    assert_eq!(db.suggest("cordoba")[0].name(), "Córdoba");
}
