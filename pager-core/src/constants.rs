//! Fixed page numbers the pager arithmetic is anchored to.

/// The page rendered by the dedicated "first page" control.
pub const FIRST_PAGE: u32 = 1;

/// Threshold below which the "previous block" control is hidden, and the
/// lowest page a backwards block jump lands on.
pub const BASE_SHIFT: u32 = 2;

/// Label used by both block-jump controls.
pub const ELLIPSIS: &str = "...";
