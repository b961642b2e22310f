//! Search helpers shared by the repository layer.

/// Escape character used in the `ILIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Build a case-insensitive "contains" pattern for `ILIKE`.
///
/// `%`, `_` and the escape character itself are escaped so the user's
/// text is matched literally.
///
/// # Examples
///
/// ```
/// use doconboard_core::search::contains_pattern;
/// assert_eq!(contains_pattern("card"), "%card%");
/// assert_eq!(contains_pattern("50%"), "%50\\%%");
/// ```
pub fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_wrapped() {
        assert_eq!(contains_pattern("Neuro"), "%Neuro%");
    }

    #[test]
    fn empty_search_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("x\\y"), "%x\\\\y%");
    }
}
