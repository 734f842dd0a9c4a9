//! Permissive text parser for integer sequences.
//!
//! Accepts three textual shapes: a bracketed list (`[1,2,3]`), a
//! comma-delimited list (`1,2,3`), or a whitespace/comma mix
//! (`1 2, 3`). The bracketed form is honored only when the interior is
//! a clean comma-separated integer list; anything else is scanned as a
//! whole, brackets included. Tokens that do not parse as integers are
//! dropped, not reported; parsing never fails. Empty or whitespace-only
//! input yields an empty sequence.

/// Parse free-form text into a sequence of integers.
///
/// Malformed bracket syntax falls back to delimiter scanning of the whole
/// text rather than failing. Worst case the result is empty.
pub fn parse_sequence(text: &str) -> Vec<i64> {
    parse_sequence_counted(text).0
}

/// Parse free-form text, also reporting how many tokens were dropped as
/// noise. Callers that want to warn about discarded input use this;
/// dropped tokens are never an error.
pub fn parse_sequence_counted(text: &str) -> (Vec<i64>, usize) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (Vec::new(), 0);
    }

    // Bracketed input only counts when the interior is a clean
    // comma-separated integer list. Anything else is scanned as a
    // whole, so stray or unmatched brackets end up glued to the edge
    // tokens and are dropped with them.
    if let Some(interior) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        if let Some(values) = clean_integer_list(interior) {
            return (values, 0);
        }
    }

    let mut values = Vec::new();
    let mut dropped = 0usize;
    for token in trimmed.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => dropped += 1,
        }
    }
    (values, dropped)
}

/// Some when every comma-separated piece trims to an integer; a
/// whitespace-only interior is the empty list. Dangling commas or noise
/// pieces disqualify the bracketed form entirely.
fn clean_integer_list(interior: &str) -> Option<Vec<i64>> {
    if interior.trim().is_empty() {
        return Some(Vec::new());
    }
    interior
        .split(',')
        .map(|piece| piece.trim().parse::<i64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_list() {
        assert_eq!(parse_sequence("[1,2,3]"), vec![1, 2, 3]);
        assert_eq!(parse_sequence("[1, 2, 2, 1]"), vec![1, 2, 2, 1]);
        assert_eq!(parse_sequence("[]"), Vec::<i64>::new());
        assert_eq!(parse_sequence("[ ]"), Vec::<i64>::new());
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(parse_sequence("1,2,2,1"), vec![1, 2, 2, 1]);
        assert_eq!(parse_sequence("1, 2, 3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_whitespace_list() {
        assert_eq!(parse_sequence(" 1  2 2 1 "), vec![1, 2, 2, 1]);
        assert_eq!(parse_sequence("1\t2\n3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_equivalent_shapes() {
        let expected = vec![1, 2, 2, 1];
        assert_eq!(parse_sequence("[1, 2, 2, 1]"), expected);
        assert_eq!(parse_sequence("1,2,2,1"), expected);
        assert_eq!(parse_sequence(" 1  2 2 1 "), expected);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_sequence(""), Vec::<i64>::new());
        assert_eq!(parse_sequence("   "), Vec::<i64>::new());
        assert_eq!(parse_sequence("\t\n"), Vec::<i64>::new());
    }

    #[test]
    fn test_noise_dropped_silently() {
        assert_eq!(parse_sequence("1, two, 3"), vec![1, 3]);
        assert_eq!(parse_sequence("a b c"), Vec::<i64>::new());
        // Non-integer numerics are noise in an integer-typed parser.
        assert_eq!(parse_sequence("1, 2.5, 3"), vec![1, 3]);
        assert_eq!(parse_sequence("1e3 5"), vec![5]);
    }

    #[test]
    fn test_noise_counted() {
        let (values, dropped) = parse_sequence_counted("1, two, 3, x");
        assert_eq!(values, vec![1, 3]);
        assert_eq!(dropped, 2);

        let (values, dropped) = parse_sequence_counted("4 5 6");
        assert_eq!(values, vec![4, 5, 6]);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_unmatched_bracket_falls_back() {
        // "[1" fails as a token; the rest still parses.
        assert_eq!(parse_sequence("[1, 2, 3"), vec![2, 3]);
        assert_eq!(parse_sequence("1, 2, 3]"), vec![1, 2]);
    }

    #[test]
    fn test_bracketed_with_trailing_text_falls_back() {
        assert_eq!(parse_sequence("[1,2,3] extra"), vec![2]);
    }

    #[test]
    fn test_bracketed_noise_scans_whole_text() {
        // A noise piece disqualifies the bracketed form; the brackets
        // then glue to the edge tokens and drop with them.
        assert_eq!(parse_sequence("[1, 2, abc]"), vec![2]);
        assert_eq!(parse_sequence("[1 2 3]"), vec![2]);

        let (values, dropped) = parse_sequence_counted("[1, 2, abc]");
        assert_eq!(values, vec![2]);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn test_extra_bracket_is_noise() {
        assert_eq!(parse_sequence("[1,2]]"), Vec::<i64>::new());
        assert_eq!(parse_sequence("[[1,2]"), Vec::<i64>::new());
    }

    #[test]
    fn test_dangling_comma_disqualifies_bracket_form() {
        assert_eq!(parse_sequence("[1, 2,]"), vec![2]);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(parse_sequence("[-1, 0, -2]"), vec![-1, 0, -2]);
        assert_eq!(parse_sequence("-5 -6"), vec![-5, -6]);
    }

    #[test]
    fn test_repeated_delimiters() {
        assert_eq!(parse_sequence("1,,2"), vec![1, 2]);
        assert_eq!(parse_sequence(",1 2,"), vec![1, 2]);
    }
}
