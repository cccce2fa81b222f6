// domain analytics sorting utilities
use std::cmp::Ordering;

use feedjoin_shared_kernel::{DomainError, DomainResult, Record};

/// Direction applied to a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Orders records by the length of their `title`.
///
/// `sort_by` is stable, so records whose titles have the same length keep
/// the order in which they were fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleLengthSort {
    order: SortOrder,
}

impl TitleLengthSort {
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    /// Longest title first.
    pub fn descending() -> Self {
        Self::new(SortOrder::Descending)
    }

    pub fn ascending() -> Self {
        Self::new(SortOrder::Ascending)
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns a new, sorted vector.
    ///
    /// Fails on the first record without a string `title`.
    pub fn sorted(&self, records: Vec<Record>) -> DomainResult<Vec<Record>> {
        let mut keyed = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| match title_length(&record) {
                Some(len) => Ok((len, record)),
                None => Err(DomainError::MissingTitle { index }),
            })
            .collect::<DomainResult<Vec<_>>>()?;

        keyed.sort_by(|(a, _), (b, _)| self.order.apply(a.cmp(b)));
        Ok(keyed.into_iter().map(|(_, record)| record).collect())
    }
}

impl Default for TitleLengthSort {
    fn default() -> Self {
        Self::descending()
    }
}

/// Title length in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts as two.
#[inline]
pub fn title_length(record: &Record) -> Option<usize> {
    record.title().map(|t| t.encode_utf16().count())
}

// ============================================================================
// Tests
// ============================================================================
