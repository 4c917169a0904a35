//! Facade crate: re-exports `munidb-core` and hosts the demos under
//! `demos/`.

pub use munidb_core::*;

/// Everything the demos (and most consumers) need in one import.
pub mod prelude {
    pub use munidb_core::{
        equals_folded, fold_key, municipios, DbStats, MuniDb, MuniError, Municipio, NameMatch,
        Result, DEFAULT_LIMIT,
    };
}
