//! Range resolver: the window of numbered buttons around the current page.
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::FIRST_PAGE;
use crate::error::{PagerError, validate_inputs};

/// Inclusive `[start, end]` window of page numbers rendered as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: u32,
    pub end: u32,
}

impl VisibleRange {
    /// Clamp a window of `block_size` pages so it starts at `current` but
    /// never before page 1 and never past `total`.
    ///
    /// Inputs must already satisfy the pager contract.
    pub(crate) fn resolve(current: u32, total: u32, block_size: u32) -> Self {
        let last_full_start = total.saturating_sub(block_size - 1);
        let start = current.min(last_full_start).max(FIRST_PAGE);
        let delta = total - start;
        let end = start + if delta >= block_size {
            block_size - 1
        } else {
            delta
        };
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn contains(&self, page: u32) -> bool {
        self.start <= page && page <= self.end
    }

    #[must_use]
    pub const fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl IntoIterator for VisibleRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

/// Resolve the visible window for `current` out of `total` pages.
///
/// # Errors
/// Returns [`PagerError::InvalidArgument`] when the inputs break the pager contract.
pub fn visible_range(
    current: u32,
    total: u32,
    block_size: u32,
) -> Result<VisibleRange, PagerError> {
    validate_inputs(current, total, block_size)?;
    Ok(VisibleRange::resolve(current, total, block_size))
}
