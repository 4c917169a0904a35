// crates/munidb-core/src/model.rs

use serde::{Deserialize, Serialize};

/// Raw municipality row as it appears in the bundled JSON.
///
/// Field names mirror the dataset (`nm` is the display name). Rows missing
/// an id or a name are considered malformed and are skipped during load.
#[derive(Debug, Deserialize)]
pub struct RawMunicipio {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nm: String,
    #[serde(default)]
    pub province: Option<String>,
}

/// A municipality entry in the normalized database.
///
/// Immutable after load; the display name keeps its original case and
/// diacritics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipio {
    pub id: String,
    pub name: String,
    pub province: Option<String>,
}

impl Municipio {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }
}

/// Convert raw rows into [`Municipio`] entries, skipping malformed rows
/// rather than failing the whole load.
pub fn build_municipios(raw: Vec<RawMunicipio>) -> Vec<Municipio> {
    raw.into_iter()
        .filter(|r| !r.id.trim().is_empty() && !r.nm.trim().is_empty())
        .map(|r| Municipio {
            id: r.id,
            name: r.nm,
            province: r.province.filter(|p| !p.trim().is_empty()),
        })
        .collect()
}

/// Simple aggregate statistics for the database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub municipios: usize,
    pub provinces: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, nm: &str) -> RawMunicipio {
        RawMunicipio {
            id: id.into(),
            nm: nm.into(),
            province: None,
        }
    }

    #[test]
    fn skips_malformed_rows() {
        let rows = vec![raw("28079", "Madrid"), raw("", "Ghost"), raw("99999", "  ")];
        let built = build_municipios(rows);
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].name(), "Madrid");
    }

    #[test]
    fn drops_blank_province() {
        let rows = vec![RawMunicipio {
            id: "45168".into(),
            nm: "Toledo".into(),
            province: Some("   ".into()),
        }];
        let built = build_municipios(rows);
        assert_eq!(built[0].province(), None);
    }
}
