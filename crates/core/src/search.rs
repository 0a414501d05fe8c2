//! Substring search helpers shared by the repository layer.

/// Trim a raw `?q=` value; blank queries yield `None` (and an empty result
/// set, not every record).
pub fn normalize_query(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|q| !q.is_empty())
}

/// Build an `ILIKE` pattern matching `query` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped with `\`, which is
/// PostgreSQL's default `LIKE` escape.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
