//! Error handling example for munidb-rs
//!
//! Searching is a total function: every input degrades to an empty result
//! list rather than an error. Only loading the bundled dataset can fail.

use munidb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== MuniDB-RS Error Handling Example ===\n");

    // Example 1: Handling database load errors
    println!("--- Example 1: Loading with error handling ---");
    let db = match MuniDb::load() {
        Ok(db) => {
            println!("✓ Database loaded ({} municipios)", db.municipios().len());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 2: Queries that cannot match
    println!("--- Example 2: Unmatchable queries ---");
    for query in ["zzzz", "qx", "12345"] {
        let hits = db.suggest(query);
        println!("  {:?} -> {} result(s)", query, hits.len());
    }
    println!();

    // Example 3: Too-short or empty queries
    println!("--- Example 3: Short queries ---");
    for query in ["", "m", "   "] {
        let hits = db.suggest(query);
        println!("  {:?} -> {} result(s)", query, hits.len());
    }
    println!();

    // Example 4: Resolving identifiers that do not exist
    println!("--- Example 4: Missing identifiers ---");
    for id in ["28079", "00000", ""] {
        match db.find_by_id(id) {
            Some(m) => println!("  {id:?} -> {}", m.name()),
            None => println!("  {id:?} -> not found"),
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
