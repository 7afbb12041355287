//! Name normalization for deduplication comparison

/// Normalize a name for comparison
///
/// - Trims leading/trailing whitespace
/// - Converts to lowercase
///
/// The normalized form is used only for matching and is never written back
/// to a record.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
