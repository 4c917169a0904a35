// crates/munidb-core/src/search.rs

//! The search engine: lazy prefix index, bounded query cache, and the
//! ranked top-K lookup invoked on every keystroke.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::importance::importance_bonus;
use crate::loader;
use crate::model::{DbStats, Municipio};
use crate::text::fold_key;
use crate::traits::NameMatch;

/// Result cap used by [`MuniDb::suggest`].
pub const DEFAULT_LIMIT: usize = 5;

/// Length of the folded prefix used for candidate narrowing.
const PREFIX_LEN: usize = 2;

/// Distinct queries held before the cache is wholesale-cleared.
const QUERY_CACHE_CEILING: usize = 50;

// Base scores by textual match quality.
const SCORE_EXACT: u32 = 10_000;
const SCORE_PREFIX: u32 = 5_000;
const SCORE_SUBSTRING: u32 = 1_000;

type PrefixIndex = HashMap<String, Vec<u32>>;
type QueryCache = HashMap<String, Vec<Municipio>>;

/// Municipality search engine.
///
/// Owns the record set, a prefix index built lazily on the first search,
/// and a bounded cache of recent query results. Construct it once at
/// application startup and share it by reference; all methods take `&self`.
///
/// Searching never fails: invalid or too-short queries degrade to an empty
/// result list.
pub struct MuniDb {
    municipios: Vec<Municipio>,
    /// folded 2-char prefix -> indices into `municipios`, dataset order.
    index: OnceCell<PrefixIndex>,
    /// folded query -> ranked results; cleared wholesale past the ceiling.
    cache: Mutex<QueryCache>,
}

impl MuniDb {
    /// Engine over the bundled dataset.
    ///
    /// The dataset itself is parsed at most once per process (see
    /// [`crate::loader::municipios`]); each `MuniDb` owns its own copy of
    /// the records along with a fresh index and cache.
    pub fn load() -> Result<Self> {
        Ok(Self::from_records(loader::municipios()?.to_vec()))
    }

    /// Engine over caller-supplied records, e.g. a filtered or test dataset.
    pub fn from_records(municipios: Vec<Municipio>) -> Self {
        Self {
            municipios,
            index: OnceCell::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// All municipalities, in dataset order.
    pub fn municipios(&self) -> &[Municipio] {
        &self.municipios
    }

    /// Resolve a municipality by its opaque identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Municipio> {
        self.municipios.iter().find(|m| m.id == id)
    }

    /// Resolve a municipality by display name, accent- and case-insensitive.
    pub fn find_by_name(&self, name: &str) -> Option<&Municipio> {
        self.municipios.iter().find(|m| m.is_named(name))
    }

    pub fn stats(&self) -> DbStats {
        let provinces: HashSet<&str> = self
            .municipios
            .iter()
            .filter_map(|m| m.province.as_deref())
            .collect();
        DbStats {
            municipios: self.municipios.len(),
            provinces: provinces.len(),
        }
    }

    /// Top-5 shorthand for per-keystroke callers.
    pub fn suggest(&self, query: &str) -> Vec<Municipio> {
        self.search(query, DEFAULT_LIMIT)
    }

    /// Ranked search, capped at `limit` results.
    ///
    /// The query is trimmed and folded before matching. Queries shorter
    /// than two folded characters model "user cleared the search box": they
    /// return nothing and reset the query cache so no stale short-session
    /// entries linger.
    ///
    /// Ranking: exact match > prefix match > substring match, each plus the
    /// importance bonus of the candidate. Equal scores keep dataset order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Municipio> {
        let q = fold_key(query.trim());
        if q.chars().count() < PREFIX_LEN {
            self.lock_cache().clear();
            return Vec::new();
        }

        if let Some(hit) = self.lock_cache().get(&q) {
            return hit.clone();
        }

        let index = self
            .index
            .get_or_init(|| build_prefix_index(&self.municipios));
        let bucket: String = q.chars().take(PREFIX_LEN).collect();

        let mut scored: Vec<(u32, &Municipio)> = Vec::new();
        if let Some(candidates) = index.get(&bucket) {
            for &i in candidates {
                let m = &self.municipios[i as usize];
                let name = fold_key(&m.name);
                let base = if name == q {
                    SCORE_EXACT
                } else if name.starts_with(&q) {
                    SCORE_PREFIX
                } else if name.contains(&q) {
                    SCORE_SUBSTRING
                } else {
                    continue;
                };
                scored.push((base + importance_bonus(&m.name), m));
            }
        }

        // Stable sort: ties keep dataset order for reproducible results.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let results: Vec<Municipio> = scored
            .into_iter()
            .take(limit)
            .map(|(_, m)| m.clone())
            .collect();

        let mut cache = self.lock_cache();
        if cache.len() >= QUERY_CACHE_CEILING {
            cache.clear();
        }
        cache.insert(q, results.clone());
        results
    }

    // The cache only ever holds data derivable from the immutable record
    // set, so a poisoned lock is safe to re-enter.
    fn lock_cache(&self) -> MutexGuard<'_, QueryCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One pass over the dataset: every record lands in exactly one bucket,
/// keyed by the first `PREFIX_LEN` chars of its folded name (or the whole
/// folded name if shorter). Order within a bucket is dataset order.
fn build_prefix_index(municipios: &[Municipio]) -> PrefixIndex {
    let mut index = PrefixIndex::new();
    for (i, m) in municipios.iter().enumerate() {
        let key: String = fold_key(&m.name).chars().take(PREFIX_LEN).collect();
        if key.is_empty() {
            continue;
        }
        index.entry(key).or_default().push(i as u32);
    }
    index
}
