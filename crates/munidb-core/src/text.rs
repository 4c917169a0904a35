// crates/munidb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Málaga` -> `Malaga`)
/// 2) Normalize to lowercase
///
/// The folded form is used only for matching, never for display. The
/// function is total and idempotent: folding a folded key is a no-op.
///
/// # Examples
///
/// ```rust
/// use munidb_core::fold_key;
///
/// assert_eq!(fold_key("Málaga"), "malaga");
/// assert_eq!(fold_key("LOGROÑO"), "logrono");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// ```rust
/// use munidb_core::equals_folded;
///
/// assert!(equals_folded("MÓSTOLES", "mostoles"));
/// assert!(!equals_folded("Madrid", "Toledo"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
