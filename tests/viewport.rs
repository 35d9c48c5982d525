//! Tests for viewport classification and breakpoint queries.

use purlin::viewport::{
    MEDIUM_MAX_COLS, QueryParseError, SMALL_MAX_COLS, ViewportClass, ViewportQuery,
};

#[test]
fn test_class_boundaries() {
    assert_eq!(ViewportClass::from_width(0), ViewportClass::Small);
    assert_eq!(ViewportClass::from_width(SMALL_MAX_COLS), ViewportClass::Small);
    assert_eq!(
        ViewportClass::from_width(SMALL_MAX_COLS + 1),
        ViewportClass::Medium
    );
    assert_eq!(
        ViewportClass::from_width(MEDIUM_MAX_COLS),
        ViewportClass::Medium
    );
    assert_eq!(
        ViewportClass::from_width(MEDIUM_MAX_COLS + 1),
        ViewportClass::Large
    );
}

#[test]
fn test_named_queries_parse() {
    assert_eq!(
        "--small-only".parse::<ViewportQuery>(),
        Ok(ViewportQuery::SmallOnly)
    );
    assert_eq!(
        "--medium-only".parse::<ViewportQuery>(),
        Ok(ViewportQuery::MediumOnly)
    );
    assert_eq!(
        " --large-only ".parse::<ViewportQuery>(),
        Ok(ViewportQuery::LargeOnly)
    );
}

#[test]
fn test_bound_queries_parse() {
    assert_eq!(
        "max-width: 120".parse::<ViewportQuery>(),
        Ok(ViewportQuery::MaxWidth(120))
    );
    assert_eq!(
        "min-width:80".parse::<ViewportQuery>(),
        Ok(ViewportQuery::MinWidth(80))
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "--tiny-only".parse::<ViewportQuery>(),
        Err(QueryParseError::UnknownQuery("--tiny-only".to_string()))
    );
    assert_eq!(
        "max-width: lots".parse::<ViewportQuery>(),
        Err(QueryParseError::MalformedBound("max-width: lots".to_string()))
    );
}

#[test]
fn test_query_matching() {
    assert!(ViewportQuery::SmallOnly.matches(SMALL_MAX_COLS));
    assert!(!ViewportQuery::SmallOnly.matches(SMALL_MAX_COLS + 1));
    assert!(ViewportQuery::MediumOnly.matches(100));
    assert!(ViewportQuery::LargeOnly.matches(200));
    assert!(ViewportQuery::MaxWidth(100).matches(100));
    assert!(!ViewportQuery::MaxWidth(100).matches(101));
    assert!(ViewportQuery::MinWidth(100).matches(100));
    assert!(!ViewportQuery::MinWidth(100).matches(99));
}
