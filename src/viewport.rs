//! Viewport class queries.
//!
//! The host owns the actual viewport observer; widgets only receive the
//! boolean match result. This module gives hosts a parsed descriptor type
//! so breakpoint queries can live in configuration instead of ad hoc
//! comparisons scattered around the embedding code.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest column count still considered a small viewport.
pub const SMALL_MAX_COLS: u16 = 79;

/// Widest column count still considered a medium viewport.
pub const MEDIUM_MAX_COLS: u16 = 159;

/// Error parsing a viewport query descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    /// The descriptor is not a known named query or bound form.
    #[error("unknown viewport query `{0}`")]
    UnknownQuery(String),
    /// A `min-width:`/`max-width:` bound did not contain a column count.
    #[error("malformed bound in viewport query `{0}`")]
    MalformedBound(String),
}

/// Discrete viewport category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    /// Up to [`SMALL_MAX_COLS`] columns
    Small,
    /// Up to [`MEDIUM_MAX_COLS`] columns
    Medium,
    /// Everything wider
    Large,
}

impl ViewportClass {
    /// Classify a viewport width in columns.
    pub fn from_width(cols: u16) -> Self {
        if cols <= SMALL_MAX_COLS {
            Self::Small
        } else if cols <= MEDIUM_MAX_COLS {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

/// A breakpoint query descriptor.
///
/// Supports the named forms `--small-only`, `--medium-only`, `--large-only`
/// and the explicit bounds `max-width: N` / `min-width: N` with `N` in
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportQuery {
    /// Matches only the small class
    SmallOnly,
    /// Matches only the medium class
    MediumOnly,
    /// Matches only the large class
    LargeOnly,
    /// Matches widths at or below the bound
    MaxWidth(u16),
    /// Matches widths at or above the bound
    MinWidth(u16),
}

impl ViewportQuery {
    /// Check the query against a viewport width in columns.
    pub fn matches(&self, cols: u16) -> bool {
        match self {
            Self::SmallOnly => ViewportClass::from_width(cols) == ViewportClass::Small,
            Self::MediumOnly => ViewportClass::from_width(cols) == ViewportClass::Medium,
            Self::LargeOnly => ViewportClass::from_width(cols) == ViewportClass::Large,
            Self::MaxWidth(bound) => cols <= *bound,
            Self::MinWidth(bound) => cols >= *bound,
        }
    }
}

impl FromStr for ViewportQuery {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "--small-only" => return Ok(Self::SmallOnly),
            "--medium-only" => return Ok(Self::MediumOnly),
            "--large-only" => return Ok(Self::LargeOnly),
            _ => {}
        }
        for (prefix, build) in [
            ("max-width:", Self::MaxWidth as fn(u16) -> Self),
            ("min-width:", Self::MinWidth as fn(u16) -> Self),
        ] {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return rest
                    .trim()
                    .parse::<u16>()
                    .map(build)
                    .map_err(|_| QueryParseError::MalformedBound(trimmed.to_string()));
            }
        }
        Err(QueryParseError::UnknownQuery(trimmed.to_string()))
    }
}
