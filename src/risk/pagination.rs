//! Pagination resolution
//!
//! Raw `limit` and `offset` query values are resolved independently against
//! configured defaults. A value is accepted only if it parses as a strictly
//! positive integer; anything else (absent, empty, unparsable, zero,
//! negative) falls back to the default for that field.

use serde::{Deserialize, Serialize};

/// Configured fallback window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    pub limit: usize,
    pub offset: usize,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Resolved window over the ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl PaginationDefaults {
    /// Resolves raw query inputs into a window.
    pub fn resolve(&self, raw_limit: Option<&str>, raw_offset: Option<&str>) -> Pagination {
        Pagination {
            limit: parse_positive(raw_limit).unwrap_or(self.limit),
            offset: parse_positive(raw_offset).unwrap_or(self.offset),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}
