//! Specification Entry Parsing
//!
//! A raw entry has the form `name[:type[:args]]`. Entries whose name starts
//! with `_` or `-` are not properties and are skipped without error.

/// Leading characters that mark a raw name as invalid
const SKIP_PREFIXES: [char; 2] = ['_', '-'];

/// The tokens of one specification string, before any normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub name: &'a str,
    pub type_token: &'a str,
    pub args_token: &'a str,
}

impl<'a> RawEntry<'a> {
    /// Split a specification string into its tokens.
    ///
    /// Returns `None` for entries that must be skipped. Segments past the
    /// third are ignored.
    pub fn parse(spec: &'a str) -> Option<Self> {
        if spec.starts_with(SKIP_PREFIXES) {
            return None;
        }

        let mut segments = spec.split(':');
        let name = segments.next().unwrap_or_default();
        let type_token = strip_type_args(segments.next().unwrap_or_default());
        let args_token = segments.next().unwrap_or_default();

        Some(Self {
            name,
            type_token,
            args_token,
        })
    }
}

/// Drop any `:...` tail still attached to a type token.
///
/// Tokens come from a `:` split, so this never changes anything today. Kept so
/// type tokens from callers that split differently are still cleaned.
fn strip_type_args(type_token: &str) -> &str {
    type_token
        .split_once(':')
        .map_or(type_token, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_full_entry() {
        let entry = RawEntry::parse("email:string:def").unwrap();
        assert_eq!(entry.name, "email");
        assert_eq!(entry.type_token, "string");
        assert_eq!(entry.args_token, "def");
    }

    #[test]
    fn test_parse_missing_segments() {
        let entry = RawEntry::parse("username").unwrap();
        assert_eq!(entry.name, "username");
        assert_eq!(entry.type_token, "");
        assert_eq!(entry.args_token, "");

        let entry = RawEntry::parse("age:int").unwrap();
        assert_eq!(entry.type_token, "int");
        assert_eq!(entry.args_token, "");
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let entry = RawEntry::parse("a:b:c:d").unwrap();
        assert_eq!(entry.type_token, "b");
        assert_eq!(entry.args_token, "c");
    }

    #[test]
    fn test_parse_empty_name() {
        let entry = RawEntry::parse(":int").unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.type_token, "int");
    }

    #[rstest]
    #[case("_private:string")]
    #[case("-flag")]
    #[case("__proto__")]
    #[case("-")]
    fn test_skip_invalid_names(#[case] spec: &str) {
        assert!(RawEntry::parse(spec).is_none());
    }

    #[test]
    fn test_strip_type_args() {
        assert_eq!(strip_type_args("string"), "string");
        assert_eq!(strip_type_args("string:def"), "string");
        assert_eq!(strip_type_args(""), "");
    }
}
