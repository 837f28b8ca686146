use super::*;
use crate::dataset::{ParseSession, Record};
use crate::vector::SparseVector;

fn parse(parser: &SparseLabelParser, line: &str) -> (Record, ParseSession) {
    let mut session = ParseSession::new();
    let record = parser.parse_line(line, &mut session).unwrap();
    (record, session)
}

// ========================================================================
// SparseLabelParser Tests
// ========================================================================

#[test]
fn test_pairs_and_trailing_label() {
    let parser = SparseLabelParser::default();
    let (record, session) = parse(&parser, "3 0 1.5 2 2.5 4 0.5 cat");

    assert_eq!(
        record.vector,
        SparseVector::from_entries([(0, 1.5), (2, 2.5), (4, 0.5)])
    );
    assert_eq!(record.labels, vec!["cat"]);
    assert_eq!(session.max_index(), Some(4));
}

#[test]
fn test_labels_interleaved_with_pairs() {
    let parser = SparseLabelParser::default();
    let (record, _) = parse(&parser, "2 first 1 0.25 middle 3 0.75 last");

    assert_eq!(record.vector.get(1), 0.25);
    assert_eq!(record.vector.get(3), 0.75);
    assert_eq!(record.labels, vec!["first", "middle", "last"]);
}

#[test]
fn test_label_index_forces_label() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_label_index(2));
    let (record, session) = parse(&parser, "1 x 5 3 0.5");

    // Token "5" sits at the label position, so "3 0.5" is the only pair
    assert_eq!(record.labels, vec!["x", "5"]);
    assert_eq!(record.vector, SparseVector::from_entries([(3, 0.5)]));
    assert_eq!(session.max_index(), Some(3));
}

#[test]
fn test_label_index_at_first_pair_position() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_label_index(1));
    let (record, _) = parse(&parser, "1 7 2 1.0 dog");

    assert_eq!(record.labels, vec!["7", "dog"]);
    assert_eq!(record.vector, SparseVector::from_entries([(2, 1.0)]));
}

#[test]
fn test_label_position_consumed_as_value() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_label_index(2));
    let (record, _) = parse(&parser, "1 4 9 tail");

    assert_eq!(record.vector, SparseVector::from_entries([(4, 9.0)]));
    assert_eq!(record.labels, vec!["tail"]);
}

#[test]
fn test_label_index_on_last_token() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_label_index(3));
    let (record, session) = parse(&parser, "1 0 1.5 9");

    assert_eq!(record.labels, vec!["9"]);
    assert_eq!(record.vector, SparseVector::from_entries([(0, 1.5)]));
    assert_eq!(session.max_index(), Some(0));
}

#[test]
fn test_label_index_on_last_token_consumed_as_value() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_label_index(2));
    let (record, _) = parse(&parser, "1 0 1.5");

    assert!(record.labels.is_empty());
    assert_eq!(record.vector, SparseVector::from_entries([(0, 1.5)]));
}

#[test]
fn test_label_index_zero_has_no_effect() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_label_index(0));
    let (record, session) = parse(&parser, "2 0 1.5 3 2.5 cat");

    // Position 0 is the declared count, which is never a label
    assert_eq!(record.labels, vec!["cat"]);
    assert_eq!(
        record.vector,
        SparseVector::from_entries([(0, 1.5), (3, 2.5)])
    );
    assert_eq!(session.max_index(), Some(3));
}

#[test]
fn test_oversized_index_is_label() {
    let parser = SparseLabelParser::default();
    let (record, session) = parse(&parser, "1 18446744073709551615 1.0 a");

    // The oversized token is a label, so "1.0 a" cannot form a pair either
    assert_eq!(record.labels, vec!["18446744073709551615", "1.0", "a"]);
    assert!(record.vector.is_empty());
    assert_eq!(session.max_index(), None);
}

#[test]
fn test_value_with_type_suffix() {
    let parser = SparseLabelParser::default();
    let (record, _) = parse(&parser, "2 0 1.5f 1 2d a");

    assert_eq!(
        record.vector,
        SparseVector::from_entries([(0, 1.5), (1, 2.0)])
    );
    assert_eq!(record.labels, vec!["a"]);
}

#[test]
fn test_lowercase_non_finite_value_rejected() {
    let parser = SparseLabelParser::default();
    let mut session = ParseSession::new();
    let err = parser.parse_line("1 0 nan a", &mut session).unwrap_err();

    assert_eq!(
        err,
        LineError::InvalidValue {
            index: 0,
            token: "nan".to_string()
        }
    );
}

#[test]
fn test_labels_only_line() {
    let parser = SparseLabelParser::default();
    let (record, session) = parse(&parser, "0 alpha beta gamma");

    assert!(record.vector.is_empty());
    assert_eq!(record.labels, vec!["alpha", "beta", "gamma"]);
    assert_eq!(session.max_index(), None);
}

#[test]
fn test_declared_count_not_enforced() {
    let parser = SparseLabelParser::default();
    let (record, _) = parse(&parser, "10 1 1.0");
    assert_eq!(record.vector.nnz(), 1);

    let (record, _) = parse(&parser, "n/a 1 1.0 2 2.0 lbl");
    assert_eq!(record.vector.nnz(), 2);
    assert_eq!(record.labels, vec!["lbl"]);
}

#[test]
fn test_count_only_line() {
    let parser = SparseLabelParser::default();
    let (record, session) = parse(&parser, "0");

    assert_eq!(record, Record::default());
    assert_eq!(session.max_index(), None);
}

#[test]
fn test_trailing_integer_is_label() {
    let parser = SparseLabelParser::default();
    let (record, session) = parse(&parser, "1 0 1.0 7");

    assert_eq!(record.labels, vec!["7"]);
    assert_eq!(session.max_index(), Some(0));
}

#[test]
fn test_runs_of_whitespace_collapse() {
    let parser = SparseLabelParser::default();
    let (record, _) = parse(&parser, "  2\t0   1.5 \t 3  2.0   tag  ");

    assert_eq!(
        record.vector,
        SparseVector::from_entries([(0, 1.5), (3, 2.0)])
    );
    assert_eq!(record.labels, vec!["tag"]);
}

#[test]
fn test_negative_token_is_label() {
    let parser = SparseLabelParser::default();
    let (record, _) = parse(&parser, "1 -1 2 0.5 end");

    assert_eq!(record.labels, vec!["-1", "end"]);
    assert_eq!(record.vector, SparseVector::from_entries([(2, 0.5)]));
}

#[test]
fn test_invalid_value_after_index() {
    let parser = SparseLabelParser::default();
    let mut session = ParseSession::new();
    let err = parser
        .parse_line("2 0 1.5 1 abc", &mut session)
        .unwrap_err();

    assert_eq!(
        err,
        LineError::InvalidValue {
            index: 1,
            token: "abc".to_string()
        }
    );
}

#[test]
fn test_session_max_spans_lines() {
    let parser = SparseLabelParser::default();
    let mut session = ParseSession::new();

    parser.parse_line("1 7 1.0 a", &mut session).unwrap();
    parser.parse_line("1 2 1.0 b", &mut session).unwrap();

    assert_eq!(session.max_index(), Some(7));
}

#[test]
fn test_comment_marker_from_config() {
    let parser = SparseLabelParser::new(ParserConfig::new().with_comment_marker("%"));
    assert_eq!(parser.comment_marker(), "%");
    assert_eq!(SparseLabelParser::default().comment_marker(), "#");
}

#[test]
fn test_describe_format_mentions_settings() {
    let parser = SparseLabelParser::new(
        ParserConfig::new()
            .with_comment_marker("//")
            .with_label_index(3),
    );
    let description = parser.describe_format();

    assert!(description.contains("\"//\""));
    assert!(description.contains("position 3"));
    assert!(!SparseLabelParser::default()
        .describe_format()
        .contains("position"));
}

// ========================================================================
// ParserConfig Tests
// ========================================================================

#[test]
fn test_config_defaults() {
    let config = ParserConfig::default();
    assert_eq!(config.comment_marker, DEFAULT_COMMENT_MARKER);
    assert_eq!(config.label_index, None);
}

#[test]
fn test_config_from_json() {
    let config = ParserConfig::from_json(r#"{"label_index": 4}"#).unwrap();
    assert_eq!(config.comment_marker, "#");
    assert_eq!(config.label_index, Some(4));

    let config = ParserConfig::from_json(r#"{"comment_marker": ";"}"#).unwrap();
    assert_eq!(config.comment_marker, ";");
    assert_eq!(config.label_index, None);
}

#[test]
fn test_config_from_invalid_json() {
    assert!(ParserConfig::from_json(r#"{"label_index": "two"}"#).is_err());
}

// ========================================================================
// ParseError Tests
// ========================================================================

#[test]
fn test_error_messages_name_line() {
    let err = ParseError::Format {
        line: 12,
        source: LineError::InvalidValue {
            index: 3,
            token: "x".to_string(),
        },
    };
    assert_eq!(err.line(), 12);
    assert!(err.to_string().contains("line 12"));

    let err = ParseError::Io {
        line: 5,
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
    };
    assert_eq!(err.line(), 5);
    assert!(err.to_string().contains("line 5"));
    assert!(err.to_string().contains("disk gone"));
}
