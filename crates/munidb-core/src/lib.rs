// crates/munidb-core/src/lib.rs

//! Municipality search/autocomplete over a bundled Spanish place dataset.
//!
//! The engine is built for per-keystroke use from a UI input handler: it
//! folds the query (case- and accent-insensitive), narrows candidates via a
//! lazily built two-character prefix index, ranks them with a composite
//! exact/prefix/substring score plus an importance bonus for well-known
//! cities, and memoizes recent queries in a bounded cache.
//!
//! ```no_run
//! use munidb_core::MuniDb;
//!
//! let db = MuniDb::load()?;
//! for m in db.suggest("madr") {
//!     println!("{} ({})", m.name(), m.id());
//! }
//! # Ok::<(), munidb_core::MuniError>(())
//! ```

pub mod error;
pub mod importance;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{MuniError, Result};
pub use crate::loader::municipios;
pub use crate::model::{DbStats, Municipio};
pub use crate::search::{MuniDb, DEFAULT_LIMIT};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
