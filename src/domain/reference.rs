//! Entity references such as `#12` or `!34`

use std::fmt;
use thiserror::Error;

/// Kind of entity a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowseType {
    Issue,
    MergeRequest,
}

impl BrowseType {
    /// Canonical marker used when printing a reference (`#12`, `!34`)
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Issue => '#',
            Self::MergeRequest => '!',
        }
    }

    /// Path segment of the item in the web UI
    #[must_use]
    pub const fn web_path(self) -> &'static str {
        match self {
            Self::Issue => "issues",
            Self::MergeRequest => "merge_requests",
        }
    }
}

impl fmt::Display for BrowseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue => f.write_str("issue"),
            Self::MergeRequest => f.write_str("merge request"),
        }
    }
}

/// Markers recognized at the start of a reference, checked in this order.
///
/// No marker is a prefix of another, so the order never changes the result.
pub const BROWSE_TYPE_PREFIXES: &[(&str, BrowseType)] = &[
    ("#", BrowseType::Issue),
    ("i", BrowseType::Issue),
    ("I", BrowseType::Issue),
    ("!", BrowseType::MergeRequest),
    ("m", BrowseType::MergeRequest),
    ("M", BrowseType::MergeRequest),
];

/// Failure to resolve a reference argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// A marker matched but the rest is not a number
    #[error("Invalid browsing number: {0}")]
    InvalidNumber(String),
    /// No marker matched
    #[error("Invalid arg: {0}")]
    InvalidArgument(String),
}

/// Split a reference like `!34` into its entity type and number
///
/// # Errors
/// Returns [`ReferenceError::InvalidNumber`] when a marker matches but the
/// remainder is not a non-negative base-10 integer, and
/// [`ReferenceError::InvalidArgument`] when no marker matches.
pub fn split_prefix_and_number(arg: &str) -> Result<(BrowseType, u64), ReferenceError> {
    for (prefix, browse_type) in BROWSE_TYPE_PREFIXES {
        if let Some(rest) = arg.strip_prefix(prefix) {
            return rest
                .parse::<u64>()
                .map(|number| (*browse_type, number))
                .map_err(|_| ReferenceError::InvalidNumber(arg.to_string()));
        }
    }
    Err(ReferenceError::InvalidArgument(arg.to_string()))
}
