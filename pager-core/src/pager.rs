//! Validated pager inputs and everything derived from them.
//!
//! A [`Pager`] is rebuilt from props on every render. Nothing here holds
//! state between calls; moving to another page means building a new
//! `Pager` with the updated `current`.
use serde::{Deserialize, Serialize};

use crate::blocks::Blocks;
use crate::constants::{BASE_SHIFT, FIRST_PAGE};
use crate::error::{PagerError, validate_inputs};
use crate::layout::PagerItem;
use crate::range::VisibleRange;

/// A navigation action a user can trigger on the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "page", rename_all = "snake_case")]
pub enum Navigation {
    FirstPage,
    PrevBlock,
    NextBlock,
    Page(u32),
}

/// Raw, unvalidated pager inputs as they arrive from a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerInput {
    pub current: u32,
    pub total: u32,
    pub visible_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PagerInput", into = "PagerInput")]
pub struct Pager {
    current: u32,
    total: u32,
    visible_pages: u32,
}

impl Pager {
    /// Build a pager for `current` out of `total` pages, `visible_pages` per block.
    ///
    /// # Errors
    /// Returns [`PagerError::InvalidArgument`] when `visible_pages` or `total`
    /// is zero, or `current` falls outside `1..=total`.
    pub fn new(current: u32, total: u32, visible_pages: u32) -> Result<Self, PagerError> {
        validate_inputs(current, total, visible_pages)?;
        Ok(Self {
            current,
            total,
            visible_pages,
        })
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub const fn visible_pages(&self) -> u32 {
        self.visible_pages
    }

    #[must_use]
    pub const fn block_size(&self) -> u32 {
        self.visible_pages
    }

    #[must_use]
    pub const fn blocks(&self) -> Blocks {
        Blocks::compute(self.current, self.total, self.visible_pages)
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange::resolve(self.current, self.total, self.block_size())
    }

    #[must_use]
    pub const fn is_first_page_disabled(&self) -> bool {
        self.current == FIRST_PAGE
    }

    /// Hidden while the current page sits within the fixed shift of page 1.
    ///
    /// The threshold does not scale with the block size.
    #[must_use]
    pub const fn is_prev_block_hidden(&self) -> bool {
        self.current <= BASE_SHIFT
    }

    #[must_use]
    pub const fn is_next_block_hidden(&self) -> bool {
        self.current == self.total || self.total - self.current < self.block_size()
    }

    /// Page the "first page" control leads to, or `None` when already there.
    #[must_use]
    pub const fn first_page_target(&self) -> Option<u32> {
        if self.is_first_page_disabled() {
            None
        } else {
            Some(FIRST_PAGE)
        }
    }

    /// One block back, floored at the shift.
    #[must_use]
    pub fn prev_block_target(&self) -> u32 {
        self.current
            .saturating_sub(self.block_size())
            .max(BASE_SHIFT)
    }

    /// One block forward, capped at the last page.
    #[must_use]
    pub fn next_block_target(&self) -> u32 {
        self.current
            .saturating_add(self.block_size())
            .min(self.total)
    }

    /// Whether `page` is drawn as a numbered button.
    ///
    /// Page 1 only ever appears as the dedicated first-page control.
    #[must_use]
    pub fn renders_page(&self, page: u32) -> bool {
        page != FIRST_PAGE && self.visible_range().contains(page)
    }

    /// Resolve a navigation action to the page it should dispatch.
    ///
    /// `Ok(None)` means the action is a no-op for this pager.
    ///
    /// # Errors
    /// Returns [`PagerError::PageNotRendered`] for a numbered page that is not
    /// currently drawn.
    pub fn target(&self, nav: Navigation) -> Result<Option<u32>, PagerError> {
        match nav {
            Navigation::FirstPage => Ok(self.first_page_target()),
            Navigation::PrevBlock => Ok(Some(self.prev_block_target())),
            Navigation::NextBlock => Ok(Some(self.next_block_target())),
            Navigation::Page(page) if self.renders_page(page) => Ok(Some(page)),
            Navigation::Page(page) => Err(PagerError::PageNotRendered { page }),
        }
    }

    /// Ordered items of the navigation list for this render.
    #[must_use]
    pub fn layout(&self) -> Vec<PagerItem> {
        crate::layout::build(self)
    }
}

impl TryFrom<PagerInput> for Pager {
    type Error = PagerError;

    fn try_from(input: PagerInput) -> Result<Self, Self::Error> {
        Self::new(input.current, input.total, input.visible_pages)
    }
}

impl From<Pager> for PagerInput {
    fn from(pager: Pager) -> Self {
        Self {
            current: pager.current,
            total: pager.total,
            visible_pages: pager.visible_pages,
        }
    }
}
