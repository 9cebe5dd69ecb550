use std::collections::HashMap;

use crate::error::Error;

/// Parsed body of a range response: hash suffix to breach count.
///
/// Keys are the 35-character uppercase hex suffixes sharing one
/// disclosed prefix. A fresh map is produced per request and nothing
/// is retained across calls.
pub type RangeMap = HashMap<String, u64>;

/// Parses the plain-text `SUFFIX:COUNT` range format into a [`RangeMap`].
///
/// Accepts both `\n` and `\r\n` line endings. An empty body is a valid
/// response meaning the prefix has no known entries. Duplicate suffixes
/// overwrite (last occurrence wins). Any line that cannot be split on a
/// colon, or whose count is not a base-10 integer, fails the whole
/// parse so a truncated or corrupted body is detected instead of
/// silently under-counting.
pub fn parse_range_body(body: &str) -> Result<RangeMap, Error> {
    let mut map = RangeMap::new();
    for (idx, line) in body.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let (suffix, count) = line
            .split_once(':')
            .ok_or(Error::MalformedLine { line: line_no })?;
        if suffix.is_empty() {
            return Err(Error::MalformedLine { line: line_no });
        }
        let count: u64 = count
            .parse()
            .map_err(|source| Error::InvalidCount { line: line_no, source })?;
        map.insert(suffix.to_string(), count);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_an_empty_map() {
        assert!(parse_range_body("").unwrap().is_empty());
    }

    #[test]
    fn single_line_without_trailing_newline() {
        let map = parse_range_body("CB127D6CC0B46A334BC1F5BEA141A1C216B:1").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["CB127D6CC0B46A334BC1F5BEA141A1C216B"], 1);
    }

    #[test]
    fn single_line_with_crlf() {
        let map = parse_range_body("CB127D6CC0B46A334BC1F5BEA141A1C216B:1\r\n").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["CB127D6CC0B46A334BC1F5BEA141A1C216B"], 1);
    }

    #[test]
    fn mixed_line_endings() {
        let map = parse_range_body("X:1\r\nY:2").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["X"], 1);
        assert_eq!(map["Y"], 2);
    }

    #[test]
    fn duplicate_suffix_last_wins() {
        let map = parse_range_body("X:1\nX:7\n").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["X"], 7);
    }

    #[test]
    fn line_without_colon_fails() {
        match parse_range_body("not-a-valid-line") {
            Err(Error::MalformedLine { line }) => assert_eq!(line, 1),
            other => panic!("expected malformed line, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_line_fails() {
        assert!(matches!(
            parse_range_body("X:1\n   \nY:2"),
            Err(Error::MalformedLine { line: 2 })
        ));
    }

    #[test]
    fn non_numeric_count_fails() {
        match parse_range_body("X:1\nY:lots") {
            Err(Error::InvalidCount { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected invalid count, got {other:?}"),
        }
    }

    #[test]
    fn negative_count_fails() {
        assert!(matches!(
            parse_range_body("X:-3"),
            Err(Error::InvalidCount { line: 1, .. })
        ));
    }
}
