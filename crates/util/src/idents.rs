/// Extracts the trailing identifier run from a raw attribute label.
///
/// Installed operations take their introspectable name from the canonical
/// operation they stand in for; raw labels can carry decoration (wrapper
/// prefixes, symbol-style `Label(name)` rendering). The name is the last
/// maximal run of identifier characters (`A-Z a-z 0-9 _`), with any
/// trailing punctuation trimmed first.
///
/// # Examples
///
/// ```
/// use levelset_util::idents::trailing_ident;
///
/// assert_eq!(trailing_ident("values"), "values");
/// assert_eq!(trailing_ident("Label(copy_within)"), "copy_within");
/// assert_eq!(trailing_ident("bound push "), "push");
/// assert_eq!(trailing_ident("???"), "");
/// ```
pub fn trailing_ident(raw: &str) -> &str {
    let is_ident = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
    let bytes = raw.as_bytes();
    let mut end = bytes.len();
    while end > 0 && !is_ident(bytes[end - 1]) {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && is_ident(bytes[start - 1]) {
        start -= 1;
    }
    &raw[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(trailing_ident("map"), "map");
        assert_eq!(trailing_ident("copy_within"), "copy_within");
    }

    #[test]
    fn test_decorated_labels() {
        assert_eq!(trailing_ident("Label(entries)"), "entries");
        assert_eq!(trailing_ident("bound fill"), "fill");
        assert_eq!(trailing_ident("get len()"), "len");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(trailing_ident(""), "");
        assert_eq!(trailing_ident("()!"), "");
    }
}
