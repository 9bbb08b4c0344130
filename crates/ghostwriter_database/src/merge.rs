//! Union-preserving list merge for profile patches.

/// Merge patch values into an existing list without dropping or reordering
/// anything already stored.
///
/// Existing entries keep their order; unseen patch entries are appended in
/// patch order; duplicates are not introduced.
///
/// # Examples
///
/// ```
/// use ghostwriter_database::merge_string_lists;
///
/// let existing = vec!["formal".to_string()];
/// let merged = merge_string_lists(&existing, &["casual".into(), "formal".into()]);
/// assert_eq!(merged, vec!["formal".to_string(), "casual".to_string()]);
/// ```
pub fn merge_string_lists(existing: &[String], patch: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = existing.to_vec();
    for value in patch {
        if !merged.iter().any(|v| v == value) {
            merged.push(value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_preserves_existing() {
        let existing = vec!["a".to_string(), "b".to_string()];
        assert_eq!(merge_string_lists(&existing, &[]), existing);
    }

    #[test]
    fn patch_onto_empty_keeps_patch_order() {
        let merged = merge_string_lists(&[], &["x".into(), "y".into()]);
        assert_eq!(merged, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn duplicates_are_not_introduced() {
        let existing = vec!["a".to_string()];
        let merged = merge_string_lists(&existing, &["a".into(), "a".into(), "b".into()]);
        assert_eq!(merged, vec!["a".to_string(), "b".to_string()]);
    }
}
