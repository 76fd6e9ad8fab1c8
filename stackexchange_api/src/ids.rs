/// Builds a string of semicolon-separated IDs, as used in `{ids}` path segments.
pub fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(";")
}
