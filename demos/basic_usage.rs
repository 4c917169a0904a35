//! Basic usage example for munidb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled municipality database
//! - Run autocomplete-style searches
//! - Resolve a municipality by id or by name

use munidb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== MuniDB-RS Basic Usage Example ===\n");

    // Load the database
    println!("Loading municipality database...");
    let db = MuniDb::load()?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} municipios across {} provinces\n",
        stats.municipios, stats.provinces
    );

    // Example 1: Autocomplete a partial query
    println!("--- Example 1: Autocomplete ---");
    for query in ["madr", "VAL", "  córdoba  "] {
        let hits = db.suggest(query);
        println!("{query:?} ->");
        for (i, m) in hits.iter().enumerate() {
            println!(
                "  {}. {} ({})",
                i + 1,
                m.name(),
                m.province().unwrap_or("-")
            );
        }
    }
    println!();

    // Example 2: Custom result cap
    println!("--- Example 2: Custom limit ---");
    let hits = db.search("sa", 10);
    println!("Top {} matches for \"sa\":", hits.len());
    for m in &hits {
        println!("  - {}", m.name());
    }
    println!();

    // Example 3: Resolve by identifier (profile/display code path)
    println!("--- Example 3: Resolve by id ---");
    match db.find_by_id("28079") {
        Some(m) => println!("28079 -> {} ({})", m.name(), m.province().unwrap_or("-")),
        None => println!("28079 -> not found"),
    }
    println!();

    // Example 4: Folded name lookup
    println!("--- Example 4: Accent-insensitive lookup ---");
    if let Some(m) = db.find_by_name("malaga") {
        println!("\"malaga\" resolves to {}", m.name());
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
