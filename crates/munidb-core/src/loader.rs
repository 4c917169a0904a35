// crates/munidb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer: the gzipped JSON dataset embedded at build
//! time, decompression, and the once-per-process parse.

use crate::error::{MuniError, Result};
use crate::model::{build_municipios, Municipio, RawMunicipio};
use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;
use std::io::BufReader;

/// Gzipped JSON dataset bundled with the crate.
static DATASET_GZ: &[u8] = include_bytes!("../data/municipios.json.gz");

// Single in-process cache so we only deserialize once per process.
static MUNICIPIOS: OnceCell<Vec<Municipio>> = OnceCell::new();

/// Lazy accessor for the full bundled dataset.
///
/// The dataset is decompressed and parsed on first call and served from the
/// in-process cache afterwards. Used by display code to resolve a place by
/// its identifier without going through the search path.
pub fn municipios() -> Result<&'static [Municipio]> {
    MUNICIPIOS.get_or_try_init(load_embedded).map(Vec::as_slice)
}

fn load_embedded() -> Result<Vec<Municipio>> {
    let gz = GzDecoder::new(DATASET_GZ);
    let reader = BufReader::new(gz);

    let raw: Vec<RawMunicipio> = serde_json::from_reader(reader)?;
    let municipios = build_municipios(raw);

    if municipios.is_empty() {
        return Err(MuniError::NotFound(
            "bundled dataset contains no usable records".to_string(),
        ));
    }
    Ok(municipios)
}
