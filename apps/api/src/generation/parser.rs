//! Response Parser — splits raw model output into a subject line and a body.
//!
//! Purely structural: the labels are stripped when present, and output that
//! deviates from the requested SUBJECT:/BODY: format degrades gracefully
//! (whole first line becomes the subject, remainder becomes the body).

use serde::Serialize;

/// A parsed subject/body pair. Both fields are whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMessage {
    pub subject: String,
    pub body: String,
}

/// Splits `raw` on its first line break, then strips a case-insensitive
/// leading `SUBJECT:` from the first line and `BODY:` from the remainder.
/// No line break means an empty body — a valid, degenerate outcome.
pub fn parse_subject_body(raw: &str) -> ParsedMessage {
    let (first_line, remainder) = match raw.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (raw, ""),
    };

    ParsedMessage {
        subject: strip_label(first_line, "SUBJECT:").to_string(),
        body: strip_label(remainder, "BODY:").to_string(),
    }
}

/// Trims `text` and removes a case-insensitive leading `label` if present.
fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
    let trimmed = text.trim();
    match trimmed.get(..label.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(label) => trimmed[label.len()..].trim(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_output_parses_exactly() {
        let parsed =
            parse_subject_body("SUBJECT: New Parking Policy\nBODY: Effective Monday, parking assignments change.");
        assert_eq!(parsed.subject, "New Parking Policy");
        assert_eq!(parsed.body, "Effective Monday, parking assignments change.");
    }

    #[test]
    fn test_labels_stripped_case_insensitively() {
        let parsed = parse_subject_body("subject: Hello\nbody: World");
        assert_eq!(parsed.subject, "Hello");
        assert_eq!(parsed.body, "World");
    }

    #[test]
    fn test_missing_body_label_keeps_remainder() {
        let parsed = parse_subject_body("SUBJECT: Townhall\nWe meet Thursday at 3pm.\nBring questions.");
        assert_eq!(parsed.subject, "Townhall");
        assert_eq!(parsed.body, "We meet Thursday at 3pm.\nBring questions.");
    }

    #[test]
    fn test_missing_both_labels_degrades_gracefully() {
        let parsed = parse_subject_body("Townhall moved\nWe meet Thursday.");
        assert_eq!(parsed.subject, "Townhall moved");
        assert_eq!(parsed.body, "We meet Thursday.");
    }

    #[test]
    fn test_no_line_break_yields_empty_body() {
        let parsed = parse_subject_body("SUBJECT: Only a subject");
        assert_eq!(parsed.subject, "Only a subject");
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let parsed = parse_subject_body("  SUBJECT:   Spaced Out  \n  BODY:   Tight.  ");
        assert_eq!(parsed.subject, "Spaced Out");
        assert_eq!(parsed.body, "Tight.");
    }

    #[test]
    fn test_empty_input_yields_empty_pair() {
        let parsed = parse_subject_body("");
        assert_eq!(parsed.subject, "");
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_label_without_content_yields_empty_fields() {
        let parsed = parse_subject_body("SUBJECT:\nBODY:");
        assert_eq!(parsed.subject, "");
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_multibyte_first_line_does_not_panic() {
        let parsed = parse_subject_body("Réunion à 15h\ncorps du message");
        assert_eq!(parsed.subject, "Réunion à 15h");
        assert_eq!(parsed.body, "corps du message");
    }
}
