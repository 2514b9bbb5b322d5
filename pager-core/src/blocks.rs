//! Block calculator: groups page numbers into blocks of `visible_pages`.
use serde::{Deserialize, Serialize};

use crate::error::{PagerError, validate_inputs};

/// Block metadata derived from the pager inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blocks {
    /// Number of blocks needed to cover every page.
    pub total: u32,
    /// 1-based block holding the current page.
    pub current: u32,
    /// Pages per block.
    pub size: u32,
}

impl Blocks {
    pub(crate) const fn compute(current: u32, total: u32, size: u32) -> Self {
        Self {
            total: total.div_ceil(size),
            current: current.div_ceil(size),
            size,
        }
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current >= self.total
    }
}

/// Calculate block metadata for `current` out of `total` pages.
///
/// # Errors
/// Returns [`PagerError::InvalidArgument`] when `block_size` is zero or the
/// page numbers are out of range.
pub fn calc_blocks(current: u32, total: u32, block_size: u32) -> Result<Blocks, PagerError> {
    validate_inputs(current, total, block_size)?;
    Ok(Blocks::compute(current, total, block_size))
}
